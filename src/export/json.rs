//! JSON Export functionality
//!
//! Snapshot of the budget and ledger with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, Transaction};
use crate::services::BudgetController;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of the current session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub budget_ceiling: Money,
    pub total_spent: Money,
    pub remaining_budget: Money,

    /// Admitted expenses in insertion order
    pub transactions: Vec<Transaction>,
}

impl LedgerExport {
    pub fn from_controller(controller: &BudgetController) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budget_ceiling: controller.budget_ceiling(),
            total_spent: controller.total_spent(),
            remaining_budget: controller.remaining_budget(),
            transactions: controller.all().to_vec(),
        }
    }
}

/// Export the session to pretty-printed JSON
pub fn export_ledger_json<W: Write>(
    controller: &BudgetController,
    writer: &mut W,
) -> ExpenseResult<()> {
    let export = LedgerExport::from_controller(controller);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ExpenseRequest;
    use chrono::NaiveDate;

    #[test]
    fn test_json_export() {
        let mut controller = BudgetController::new();
        controller.set_budget("100").unwrap();
        controller
            .add_expense(
                ExpenseRequest::new("Lunch", "12.50")
                    .category("Food")
                    .date(NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()),
            )
            .unwrap();

        let mut buffer = Vec::new();
        export_ledger_json(&controller, &mut buffer).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.budget_ceiling, Money::from_cents(10000));
        assert_eq!(parsed.remaining_budget, Money::from_cents(8750));
        assert_eq!(parsed.transactions.len(), 1);
        assert_eq!(parsed.transactions[0].amount_text(), "12.50");
    }
}
