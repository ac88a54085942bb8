//! Expense Tracker - record expenses against a single budget ceiling
//!
//! The heart of the crate is a small budget-ledger core: a [`services::Ledger`]
//! of admitted expenses and a [`services::BudgetController`] that validates
//! each new expense, rejects anything over the remaining budget and keeps the
//! remaining balance equal to `ceiling - total spent` at all times. Every
//! rejected operation leaves the state exactly as it was.
//!
//! # Architecture
//!
//! - `models`: Money, categories and transactions
//! - `services`: The ledger and the budget controller
//! - `error`: Custom error types
//! - `config`: Configuration paths and user settings
//! - `display`: Text formatting for the shell
//! - `reports`: Spending breakdowns
//! - `export`: CSV, JSON and YAML snapshots of the ledger
//! - `cli`: The line-oriented shell
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use expense_tracker::services::{BudgetController, ExpenseRequest};
//!
//! let mut budget = BudgetController::new();
//! budget.set_budget("100").unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let admission = budget
//!     .add_expense(ExpenseRequest::new("Lunch", "12.50").category("Food").date(today))
//!     .unwrap();
//! assert_eq!(admission.remaining.to_string(), "$87.50");
//!
//! let rejected = budget.add_expense(ExpenseRequest::new("Gift", "200").category("Shopping").date(today));
//! assert!(rejected.unwrap_err().is_budget_exceeded());
//! assert_eq!(budget.all().len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{ExpenseError, ExpenseResult};
