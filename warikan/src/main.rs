#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod handler;

fn main() {
    if let Err(err) = bootstrap::run() {
        tracing::error!("Console loop stopped: {err}");
        std::process::exit(1);
    }
}
