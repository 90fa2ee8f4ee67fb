#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod outcome_presenter;
pub mod settlement_presenter;

pub use error_presenter::format_process_error;
pub use outcome_presenter::OutcomePresenter;
pub use settlement_presenter::SettlementPresenter;

use warikan_domain::PayerId;

pub(crate) fn mention(payer_id: &PayerId) -> String {
    format!("<@{payer_id}>")
}
