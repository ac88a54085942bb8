//! Core data models for the expense tracker
//!
//! Plain immutable records: money amounts, categories and transactions.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{Category, CategoryPolicy};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
