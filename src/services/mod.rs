//! Service layer for the expense tracker
//!
//! The ledger stores admitted expenses; the budget controller validates
//! and admits them and owns the budget ceiling.

pub mod budget;
pub mod ledger;

pub use budget::{Admission, BudgetController, ExpenseRequest};
pub use ledger::{CategoryTotal, Ledger};
