use crate::{
    error::UsecaseError,
    ports::{EventRepository, PayerRepository, PaymentRepository},
};
use warikan_domain::{
    Event, EventId, Payer, PayerId, Payment, PaymentId, Settlement, SettlementEngine, Yen,
};

#[derive(Clone, Copy)]
pub struct PaymentUsecase<'a> {
    events: &'a dyn EventRepository,
    payers: &'a dyn PayerRepository,
    payments: &'a dyn PaymentRepository,
}

impl<'a> PaymentUsecase<'a> {
    pub fn new(
        events: &'a dyn EventRepository,
        payers: &'a dyn PayerRepository,
        payments: &'a dyn PaymentRepository,
    ) -> Self {
        Self {
            events,
            payers,
            payments,
        }
    }

    /// Records a payment, enrolling the payer in the event on the way.
    pub fn create(
        &self,
        event_id: EventId,
        payer_id: PayerId,
        amount: Yen,
    ) -> Result<Payment, UsecaseError> {
        self.ensure_event(&event_id)?;

        if payer_id.is_unknown() {
            tracing::error!("payer id is unknown");
            return Err(UsecaseError::UnknownPayer);
        }
        let payer = Payer {
            id: payer_id.clone(),
            event_id: event_id.clone(),
        };
        self.payers.create_if_not_exists(&payer).inspect_err(|e| {
            tracing::error!("Failed to create payer: {e}");
        })?;

        let payment = Payment::new(event_id, payer_id, amount);
        self.payments.create(&payment).inspect_err(|e| {
            tracing::error!("Failed to create payment: {e}");
        })?;

        tracing::info!(
            payment_id = %payment.id,
            event_id = %payment.event_id,
            payer_id = %payment.payer_id,
            amount = %payment.amount,
            "Payment recorded"
        );
        Ok(payment)
    }

    /// Retracts a payment of `event_id`; returns whether one was removed.
    pub fn delete(
        &self,
        event_id: &EventId,
        payment_id: PaymentId,
    ) -> Result<bool, UsecaseError> {
        let deleted = self
            .payments
            .delete(event_id, payment_id)
            .inspect_err(|e| {
                tracing::error!("Failed to delete payment: {e}");
            })?;
        if deleted {
            tracing::info!(%event_id, %payment_id, "Payment deleted");
        } else {
            tracing::warn!(%event_id, %payment_id, "No such payment in this event");
        }
        Ok(deleted)
    }

    /// Enrolls a payer without recording a payment.
    pub fn join(&self, event_id: EventId, payer_id: PayerId) -> Result<Payer, UsecaseError> {
        self.ensure_event(&event_id)?;

        if payer_id.is_unknown() {
            tracing::error!("payer id is unknown");
            return Err(UsecaseError::UnknownPayer);
        }
        let payer = Payer {
            id: payer_id,
            event_id,
        };
        self.payers.create(&payer)?;

        tracing::info!(event_id = %payer.event_id, payer_id = %payer.id, "Payer joined");
        Ok(payer)
    }

    /// Computes a fresh settlement from the event's full payment history.
    pub fn settle(&self, event_id: &EventId) -> Result<Settlement, UsecaseError> {
        let payments = self.payments.find_by_event(event_id)?;
        let payers = self.payers.find_by_event(event_id)?;

        let settlement = SettlementEngine.settle(&payers, &payments)?;
        tracing::info!(
            %event_id,
            payers = payers.len(),
            payments = payments.len(),
            instructions = settlement.instructions.len(),
            "Settlement computed"
        );
        Ok(settlement)
    }

    fn ensure_event(&self, event_id: &EventId) -> Result<(), UsecaseError> {
        if event_id.is_unknown() {
            tracing::error!("event id is unknown");
            return Err(UsecaseError::UnknownEvent);
        }
        let event = Event {
            id: event_id.clone(),
        };
        self.events.create_if_not_exists(&event).inspect_err(|e| {
            tracing::error!("Failed to create event: {e}");
        })?;
        Ok(())
    }
}
