use warikan_application::{CommandParseError, ProcessError, RepositoryError, UsecaseError};
use warikan_domain::{AmountError, SettlementError};
use warikan_i18n as i18n;

pub fn format_process_error(error: &ProcessError, mention: impl std::fmt::Display) -> String {
    let message = match error {
        ProcessError::Parse(CommandParseError::InvalidArgument(text)) if text.is_empty() => {
            i18n::EMPTY_COMMAND.to_string()
        }
        ProcessError::Parse(CommandParseError::InvalidArgument(text)) => {
            i18n::invalid_argument(text)
        }
        ProcessError::Parse(CommandParseError::Amount(err)) => format_amount_error(err),
        ProcessError::InvalidPaymentId(id) => i18n::invalid_payment_id(id),
        ProcessError::Usecase(err) => format_usecase_error(err),
    };
    format!("{mention} {message}")
}

fn format_usecase_error(error: &UsecaseError) -> String {
    match error {
        UsecaseError::UnknownEvent => i18n::UNKNOWN_EVENT.to_string(),
        UsecaseError::UnknownPayer => i18n::UNKNOWN_PAYER.to_string(),
        UsecaseError::Repository(RepositoryError::AlreadyExists { .. })
        | UsecaseError::Repository(RepositoryError::Storage(_)) => {
            i18n::STORAGE_FAILED.to_string()
        }
        UsecaseError::Settlement(SettlementError::NoParticipants) => {
            i18n::NO_PARTICIPANTS.to_string()
        }
        UsecaseError::Settlement(SettlementError::BalanceOverflow { payer }) => {
            format!("{} (<@{payer}>)", i18n::SETTLEMENT_FAILED)
        }
        UsecaseError::Settlement(SettlementError::Amount(err)) => {
            format!("{} ({})", i18n::SETTLEMENT_FAILED, format_amount_error(err))
        }
    }
}

fn format_amount_error(error: &AmountError) -> String {
    match error {
        AmountError::Overflow => i18n::AMOUNT_TOO_LARGE.to_string(),
        AmountError::Negative(_)
        | AmountError::NegativeMultiplier(_)
        | AmountError::NonPositiveDivisor(_) => i18n::AMOUNT_INVALID.to_string(),
    }
}
