#![warn(clippy::uninlined_format_args)]

pub mod memory_store;
pub mod parser;

pub use memory_store::InMemoryStore;
pub use parser::WarikanCommandParser;
