//! Transaction display formatting
//!
//! Renders the ledger as a register table and admitted expenses as a
//! one-line confirmation.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;
use crate::services::Admission;

/// ISO date format used when the configured one is unusable
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format a date with a strftime pattern, falling back to ISO on a bad pattern
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut formatted = String::new();
    if write!(formatted, "{}", date.format(pattern)).is_err() {
        return date.format(FALLBACK_DATE_FORMAT).to_string();
    }
    formatted
}

/// Format the ledger as a register, one row per expense in insertion order
///
/// Amounts are shown exactly as they were typed.
pub fn format_transaction_register(transactions: &[Transaction], date_format: &str) -> String {
    if transactions.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = transactions.iter().enumerate().map(|(i, txn)| RegisterRow {
        index: i + 1,
        description: txn.description().to_string(),
        amount: txn.amount_text().to_string(),
        category: txn.category().to_string(),
        date: format_date(txn.date(), date_format),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    let mut output = table.to_string();
    output.push('\n');
    output
}

/// One-line confirmation for an admitted expense
pub fn format_admission(admission: &Admission, date_format: &str) -> String {
    let txn = &admission.transaction;
    format!(
        "Added: {} {} ({}, {})",
        txn.description(),
        txn.amount_text(),
        txn.category(),
        format_date(txn.date(), date_format)
    )
}
