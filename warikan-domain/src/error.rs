#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount cannot be negative (got {0})")]
    Negative(i64),
    #[error("multiplier cannot be negative (got {0})")]
    NegativeMultiplier(i64),
    #[error("divisor must be positive (got {0})")]
    NonPositiveDivisor(i64),
    #[error("amount is out of range")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettlementError {
    #[error("event has no participants")]
    NoParticipants,
    #[error("balance of {payer} is out of range")]
    BalanceOverflow { payer: crate::model::PayerId },
    #[error(transparent)]
    Amount(#[from] AmountError),
}
