use crate::{
    error::{CommandParseError, RepositoryError},
    model::Command,
};
use warikan_domain::{Event, EventId, Payer, Payment, PaymentId};

pub trait EventRepository: Send + Sync {
    fn create_if_not_exists(&self, event: &Event) -> Result<(), RepositoryError>;
}

pub trait PayerRepository: Send + Sync {
    /// Fails with `AlreadyExists` when the payer is already enrolled in the event.
    fn create(&self, payer: &Payer) -> Result<(), RepositoryError>;

    fn create_if_not_exists(&self, payer: &Payer) -> Result<(), RepositoryError>;

    /// Enrolled payers in enrollment order.
    fn find_by_event(&self, event_id: &EventId) -> Result<Vec<Payer>, RepositoryError>;
}

pub trait PaymentRepository: Send + Sync {
    fn create(&self, payment: &Payment) -> Result<(), RepositoryError>;

    /// Removes the payment only when it belongs to `event_id`.
    ///
    /// Returns `false` when no such payment exists in that event; that is not
    /// an error.
    fn delete(&self, event_id: &EventId, payment_id: PaymentId) -> Result<bool, RepositoryError>;

    fn find_by_event(&self, event_id: &EventId) -> Result<Vec<Payment>, RepositoryError>;
}

pub trait CommandParser: Send + Sync {
    fn parse<'a>(&self, text: &'a str) -> Result<Command<'a>, CommandParseError>;
}
