use crate::mention;
use warikan_domain::{Settlement, Transfer};
use warikan_i18n as i18n;

pub struct SettlementPresenter;

impl SettlementPresenter {
    /// Total line first, then one line per transfer in the order they were
    /// produced.
    pub fn render(settlement: &Settlement) -> String {
        let mut lines = vec![format!(
            "{}: {}",
            i18n::TOTAL,
            i18n::format_yen(settlement.total.amount())
        )];

        if settlement.instructions.is_empty() {
            lines.push(i18n::NOTHING_TO_SETTLE.to_string());
        } else {
            lines.extend(settlement.instructions.iter().map(Self::render_transfer));
        }

        lines.join("\n")
    }

    pub fn render_transfer(transfer: &Transfer) -> String {
        format!(
            "{} → {}: {}",
            mention(&transfer.from),
            mention(&transfer.to),
            i18n::format_yen(transfer.amount.amount())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warikan_domain::{PayerId, Yen};

    fn transfer(from: &str, to: &str, amount: i64) -> Transfer {
        Transfer {
            from: PayerId::new(from),
            to: PayerId::new(to),
            amount: Yen::new(amount).expect("valid amount"),
        }
    }

    #[test]
    fn renders_total_and_transfers_in_order() {
        let settlement = Settlement {
            total: Yen::new(1500).expect("valid amount"),
            instructions: vec![transfer("B", "A", 500), transfer("C", "A", 34)],
        };

        let rendered = SettlementPresenter::render(&settlement);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(i18n::TOTAL));
        assert!(lines[0].contains("1,500"));
        assert_eq!(lines[1], format!("<@B> → <@A>: {}", i18n::format_yen(500)));
        assert_eq!(lines[2], format!("<@C> → <@A>: {}", i18n::format_yen(34)));
    }

    #[test]
    fn empty_settlement_says_nothing_to_settle() {
        let settlement = Settlement {
            total: Yen::ZERO,
            instructions: Vec::new(),
        };

        let rendered = SettlementPresenter::render(&settlement);

        assert!(rendered.ends_with(i18n::NOTHING_TO_SETTLE));
        assert!(!rendered.contains('→'));
    }
}
