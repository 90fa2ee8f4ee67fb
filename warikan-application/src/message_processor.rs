use crate::{
    error::{ProcessError, RepositoryError, UsecaseError},
    model::Command,
    payment_usecase::PaymentUsecase,
    ports::CommandParser,
};
use warikan_domain::{EventId, Payer, PayerId, Payment, PaymentId, Settlement};

#[derive(Debug, PartialEq)]
pub enum ProcessingOutcome {
    PaymentRegistered(Payment),
    Joined(Payer),
    AlreadyJoined(PayerId),
    PaymentDeleted(PaymentId),
    PaymentNotFound(PaymentId),
    Settled(Settlement),
    Help,
}

/// Turns the text of one slash command into a use-case call.
#[derive(Clone, Copy)]
pub struct MessageProcessor<'a> {
    parser: &'a dyn CommandParser,
    usecase: PaymentUsecase<'a>,
}

impl<'a> MessageProcessor<'a> {
    pub fn new(parser: &'a dyn CommandParser, usecase: PaymentUsecase<'a>) -> Self {
        Self { parser, usecase }
    }

    pub fn process(
        &self,
        event_id: EventId,
        payer_id: PayerId,
        text: &str,
    ) -> Result<ProcessingOutcome, ProcessError> {
        let command = self.parser.parse(text)?;
        tracing::debug!(%event_id, %payer_id, ?command, "Processing command");

        match command {
            Command::Pay(amount) => self
                .usecase
                .create(event_id, payer_id, amount)
                .map(ProcessingOutcome::PaymentRegistered)
                .map_err(ProcessError::from),
            Command::Join => match self.usecase.join(event_id, payer_id) {
                Ok(payer) => Ok(ProcessingOutcome::Joined(payer)),
                Err(UsecaseError::Repository(RepositoryError::AlreadyExists {
                    payer_id, ..
                })) => Ok(ProcessingOutcome::AlreadyJoined(payer_id)),
                Err(err) => Err(err.into()),
            },
            Command::Settle => self
                .usecase
                .settle(&event_id)
                .map(ProcessingOutcome::Settled)
                .map_err(ProcessError::from),
            Command::Help => Ok(ProcessingOutcome::Help),
            Command::Delete(raw_id) => {
                let payment_id = PaymentId::parse_str(raw_id)
                    .map_err(|_| ProcessError::InvalidPaymentId(raw_id.to_string()))?;
                if self.usecase.delete(&event_id, payment_id)? {
                    Ok(ProcessingOutcome::PaymentDeleted(payment_id))
                } else {
                    Ok(ProcessingOutcome::PaymentNotFound(payment_id))
                }
            }
        }
    }
}
