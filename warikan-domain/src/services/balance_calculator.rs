use crate::{
    error::SettlementError,
    model::{Balance, MemberBalances, Payer, PayerId, Payment},
};

/// Reduces an event's payments into per-payer signed balances.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Splits every payment evenly over the enrolled payers.
    ///
    /// Each share is rounded up, and the payer is credited `share * (n - 1)`.
    /// When an amount is not divisible by `n` every other member covers less
    /// than one unit more than an exact split would ask of them, so the
    /// rounding moves at most `n - 1` units per payment. Balances of enrolled
    /// payers still sum to zero.
    ///
    /// # Errors
    /// `NoParticipants` when `payers` is empty.
    pub fn calculate(
        &self,
        payers: &[Payer],
        payments: &[Payment],
    ) -> Result<MemberBalances, SettlementError> {
        let mut balances: MemberBalances = payers
            .iter()
            .map(|payer| (payer.id.clone(), Balance::ZERO))
            .collect();
        if balances.is_empty() {
            return Err(SettlementError::NoParticipants);
        }

        // Duplicate roster entries collapse into one participant.
        let member_count = balances.len() as i64;
        let enrolled: Vec<PayerId> = balances.keys().cloned().collect();

        for payment in payments {
            let share = payment.amount.ceil_divide_by(member_count)?;
            let credit = share.multiply_by(member_count - 1)?;

            for member in enrolled.iter().filter(|member| **member != payment.payer_id) {
                credit_or_overflow(&mut balances, member, |balance| balance.checked_add(share))?;
            }

            if !balances.contains_key(&payment.payer_id) {
                tracing::warn!(
                    payment_id = %payment.id,
                    payer_id = %payment.payer_id,
                    "Payment made by a payer who is not enrolled in the event"
                );
            }
            credit_or_overflow(&mut balances, &payment.payer_id, |balance| {
                balance.checked_sub(credit)
            })?;
        }

        tracing::debug!(
            members = member_count,
            payments = payments.len(),
            "Aggregated balances"
        );

        Ok(balances)
    }
}

fn credit_or_overflow<F>(
    balances: &mut MemberBalances,
    member: &PayerId,
    apply: F,
) -> Result<(), SettlementError>
where
    F: FnOnce(Balance) -> Option<Balance>,
{
    let balance = balances.entry(member.clone()).or_insert(Balance::ZERO);
    *balance = apply(*balance).ok_or_else(|| SettlementError::BalanceOverflow {
        payer: member.clone(),
    })?;
    Ok(())
}
