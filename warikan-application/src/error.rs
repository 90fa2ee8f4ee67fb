use warikan_domain::{AmountError, EventId, PayerId, SettlementError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("payer {payer_id} already joined event {event_id}")]
    AlreadyExists { event_id: EventId, payer_id: PayerId },
    #[error("storage failure: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsecaseError {
    #[error("event id is unknown")]
    UnknownEvent,
    #[error("payer id is unknown")]
    UnknownPayer,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Settlement(#[from] SettlementError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandParseError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Amount(#[from] AmountError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    #[error(transparent)]
    Parse(#[from] CommandParseError),
    #[error("invalid payment id '{0}'")]
    InvalidPaymentId(String),
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
}
