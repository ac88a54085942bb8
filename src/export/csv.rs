//! CSV Export functionality
//!
//! One row per admitted expense, amounts exactly as entered.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::services::Ledger;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> ExpenseResult<()> {
    let to_export_error = |e: csv::Error| ExpenseError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Description", "Category", "Amount"])
        .map_err(to_export_error)?;

    for txn in ledger {
        csv_writer
            .write_record([
                txn.id().to_string().as_str(),
                txn.date().to_string().as_str(),
                txn.description(),
                txn.category().as_str(),
                txn.amount_text(),
            ])
            .map_err(to_export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
