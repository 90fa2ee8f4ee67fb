use crate::handler::ConsoleHandler;
use std::{
    env,
    io::{self, BufRead, Write},
};
use tracing_subscriber::EnvFilter;
use warikan_application::{MessageProcessor, PaymentUsecase};
use warikan_infrastructure::{InMemoryStore, WarikanCommandParser};

pub const DEFAULT_COMMAND: &str = "/warikan";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub command: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::with_command(env::var("WARIKAN_COMMAND").ok())
    }

    fn with_command(command: Option<String>) -> Self {
        let command = command
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_COMMAND.to_string());
        Self { command }
    }
}

/// Logs go to stderr; stdout carries replies.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads `<event> <payer> <text>` lines from stdin until EOF.
pub fn run() -> io::Result<()> {
    init_logging();

    let config = AppConfig::from_env();
    tracing::info!(command = %config.command, "Listening on stdin");

    let store = InMemoryStore::new();
    let parser = WarikanCommandParser;
    let usecase = PaymentUsecase::new(&store, &store, &store);
    let processor = MessageProcessor::new(&parser, usecase);
    let handler = ConsoleHandler::new(config.command, processor);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(reply) = handler.handle_line(&line) {
            writeln!(stdout, "{reply}")?;
            stdout.flush()?;
        }
    }

    tracing::info!("Input closed");
    Ok(())
}
