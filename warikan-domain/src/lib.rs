#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::{AmountError, SettlementError};
pub use model::{
    Balance, Event, EventId, MemberBalances, Payer, PayerId, Payment, PaymentId, Settlement,
    Transfer, Yen,
};
pub use services::{BalanceCalculator, SettlementCalculator, SettlementEngine};
