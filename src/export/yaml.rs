//! YAML Export functionality

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::LedgerExport;
use crate::services::BudgetController;

/// Export the session to YAML with a short header comment
pub fn export_ledger_yaml<W: Write>(
    controller: &BudgetController,
    writer: &mut W,
) -> ExpenseResult<()> {
    let export = LedgerExport::from_controller(controller);
    let to_export_error = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Ledger Export").map_err(to_export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_error)?;
    writeln!(writer).map_err(to_export_error)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
