use crate::model::{MemberBalances, PayerId, Transfer, Yen};

/// Greedy cash-flow minimizer.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Pairs the largest debtor with the largest creditor until one side runs out.
    ///
    /// Every pairing zeroes at least one balance, so at most `n - 1` transfers
    /// are emitted. Ties go to the lowest `PayerId`.
    pub fn calculate(&self, balances: MemberBalances) -> Vec<Transfer> {
        let mut working_balances = balances;
        let mut transfers = Vec::new();

        while let Some((debtor, creditor)) = extremes(&working_balances) {
            let debt = working_balances[&debtor];
            let credit = working_balances[&creditor];
            if debt.signum() <= 0 || credit.signum() >= 0 {
                break;
            }

            // debt > 0, so the minimum always fits back into i64.
            let amount = debt.amount().unsigned_abs().min(credit.amount().unsigned_abs());
            let Ok(amount) = Yen::try_from(amount) else {
                break;
            };

            if let Some(balance) = working_balances.get_mut(&debtor) {
                *balance -= amount;
            }
            if let Some(balance) = working_balances.get_mut(&creditor) {
                *balance += amount;
            }

            tracing::debug!(from = %debtor, to = %creditor, %amount, "Settlement transfer");
            transfers.push(Transfer {
                from: debtor,
                to: creditor,
                amount,
            });
        }

        let residue: i128 = working_balances
            .values()
            .map(|balance| i128::from(balance.amount()))
            .sum();
        if residue != 0 {
            tracing::debug!(residue, "Balances did not fully net out");
        }

        transfers
    }
}

/// Largest debtor and largest creditor; the first one wins a tie.
fn extremes(balances: &MemberBalances) -> Option<(PayerId, PayerId)> {
    let mut iter = balances.iter();
    let (first, &first_balance) = iter.next()?;
    let (mut max_id, mut max_balance) = (first, first_balance);
    let (mut min_id, mut min_balance) = (first, first_balance);

    for (id, &balance) in iter {
        if balance > max_balance {
            (max_id, max_balance) = (id, balance);
        }
        if balance < min_balance {
            (min_id, min_balance) = (id, balance);
        }
    }

    Some((max_id.clone(), min_id.clone()))
}
