pub mod balance_calculator;
pub mod settlement_calculator;
pub mod settlement_engine;

pub use balance_calculator::BalanceCalculator;
pub use settlement_calculator::SettlementCalculator;
pub use settlement_engine::SettlementEngine;
