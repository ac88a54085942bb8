//! Display formatting for terminal output
//!
//! Turns what the budget core returns (or rejects) into text for the shell.

pub mod budget;
pub mod transaction;

pub use budget::{format_budget_status, format_remaining, format_warning};
pub use transaction::{format_admission, format_date, format_transaction_register};
