use crate::{
    error::SettlementError,
    model::{Payer, Payment, Settlement, Yen},
    services::{BalanceCalculator, SettlementCalculator},
};

/// Runs a full settlement over a snapshot of one event's roster and payments.
pub struct SettlementEngine;

impl SettlementEngine {
    pub fn settle(
        &self,
        payers: &[Payer],
        payments: &[Payment],
    ) -> Result<Settlement, SettlementError> {
        let total = payments
            .iter()
            .try_fold(Yen::ZERO, |total, payment| total.checked_add(payment.amount))?;
        let balances = BalanceCalculator.calculate(payers, payments)?;
        let instructions = SettlementCalculator.calculate(balances);

        Ok(Settlement {
            total,
            instructions,
        })
    }
}
