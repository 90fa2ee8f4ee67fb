#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod message_processor;
pub mod model;
pub mod payment_usecase;
pub mod ports;

pub use error::{CommandParseError, ProcessError, RepositoryError, UsecaseError};
pub use message_processor::{MessageProcessor, ProcessingOutcome};
pub use model::Command;
pub use payment_usecase::PaymentUsecase;
pub use ports::{CommandParser, EventRepository, PayerRepository, PaymentRepository};
