use crate::{SettlementPresenter, mention};
use warikan_application::ProcessingOutcome;
use warikan_i18n as i18n;

pub struct OutcomePresenter;

impl OutcomePresenter {
    pub fn render(outcome: &ProcessingOutcome) -> String {
        match outcome {
            ProcessingOutcome::PaymentRegistered(payment) => i18n::payment_registered(
                mention(&payment.payer_id),
                payment.amount.amount(),
                payment.id,
            ),
            ProcessingOutcome::Joined(payer) => i18n::joined(mention(&payer.id)),
            ProcessingOutcome::AlreadyJoined(payer_id) => i18n::already_joined(mention(payer_id)),
            ProcessingOutcome::PaymentDeleted(payment_id) => i18n::payment_deleted(payment_id),
            ProcessingOutcome::PaymentNotFound(payment_id) => i18n::payment_not_found(payment_id),
            ProcessingOutcome::Settled(settlement) => SettlementPresenter::render(settlement),
            ProcessingOutcome::Help => i18n::HELP.to_string(),
        }
    }
}
