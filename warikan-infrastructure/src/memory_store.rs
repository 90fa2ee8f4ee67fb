use dashmap::{DashMap, mapref::entry::Entry};
use indexmap::IndexMap;
use std::sync::Arc;
use warikan_application::{EventRepository, PayerRepository, PaymentRepository, RepositoryError};
use warikan_domain::{Event, EventId, Payer, PayerId, Payment, PaymentId};

/// Process-local store backing all three repositories.
///
/// Payers and payments are grouped per event in insertion order. Deletion
/// arrives with a payment id only, so a reverse index maps it to its event.
/// Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    events: Arc<DashMap<EventId, Event>>,
    payers: Arc<DashMap<EventId, IndexMap<PayerId, Payer>>>,
    payments: Arc<DashMap<EventId, IndexMap<PaymentId, Payment>>>,
    payment_events: Arc<DashMap<PaymentId, EventId>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_event(&self, event_id: &EventId) -> bool {
        self.events.contains_key(event_id)
    }
}

impl EventRepository for InMemoryStore {
    fn create_if_not_exists(&self, event: &Event) -> Result<(), RepositoryError> {
        self.events
            .entry(event.id.clone())
            .or_insert_with(|| event.clone());
        Ok(())
    }
}

impl PayerRepository for InMemoryStore {
    fn create(&self, payer: &Payer) -> Result<(), RepositoryError> {
        let mut payers = self.payers.entry(payer.event_id.clone()).or_default();
        if payers.contains_key(&payer.id) {
            return Err(RepositoryError::AlreadyExists {
                event_id: payer.event_id.clone(),
                payer_id: payer.id.clone(),
            });
        }
        payers.insert(payer.id.clone(), payer.clone());
        Ok(())
    }

    fn create_if_not_exists(&self, payer: &Payer) -> Result<(), RepositoryError> {
        self.payers
            .entry(payer.event_id.clone())
            .or_default()
            .entry(payer.id.clone())
            .or_insert_with(|| payer.clone());
        Ok(())
    }

    fn find_by_event(&self, event_id: &EventId) -> Result<Vec<Payer>, RepositoryError> {
        Ok(self
            .payers
            .get(event_id)
            .map(|payers| payers.values().cloned().collect())
            .unwrap_or_default())
    }
}

impl PaymentRepository for InMemoryStore {
    fn create(&self, payment: &Payment) -> Result<(), RepositoryError> {
        match self.payment_events.entry(payment.id) {
            Entry::Occupied(_) => {
                return Err(RepositoryError::Storage(format!(
                    "payment {} already exists",
                    payment.id
                )));
            }
            Entry::Vacant(entry) => {
                entry.insert(payment.event_id.clone());
            }
        }
        self.payments
            .entry(payment.event_id.clone())
            .or_default()
            .insert(payment.id, payment.clone());
        Ok(())
    }

    fn delete(
        &self,
        event_id: &EventId,
        payment_id: PaymentId,
    ) -> Result<bool, RepositoryError> {
        if self
            .payment_events
            .remove_if(&payment_id, |_, owner| owner == event_id)
            .is_none()
        {
            tracing::debug!(%event_id, %payment_id, "Payment to delete was not found");
            return Ok(false);
        }
        if let Some(mut payments) = self.payments.get_mut(event_id) {
            payments.shift_remove(&payment_id);
        }
        Ok(true)
    }

    fn find_by_event(&self, event_id: &EventId) -> Result<Vec<Payment>, RepositoryError> {
        Ok(self
            .payments
            .get(event_id)
            .map(|payments| payments.values().cloned().collect())
            .unwrap_or_default())
    }
}
