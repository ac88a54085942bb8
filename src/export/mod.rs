//! Export module for the expense tracker
//!
//! Writes the current in-memory session out for use elsewhere:
//! - CSV: the register (spreadsheet-compatible)
//! - JSON: machine-readable snapshot with budget totals
//! - YAML: human-readable snapshot
//!
//! There is no import; the ledger still lives only for the process lifetime.

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

pub use self::csv::export_transactions_csv;
pub use json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;

use crate::error::{ExpenseError, ExpenseResult};
use crate::services::BudgetController;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ExportFormat {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ExpenseError::Export(format!(
                "Unknown export format '{}': expected csv, json or yaml",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Export the session in the given format
pub fn export_ledger<W: Write>(
    controller: &BudgetController,
    format: ExportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(controller.ledger(), writer),
        ExportFormat::Json => export_ledger_json(controller, writer),
        ExportFormat::Yaml => export_ledger_yaml(controller, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/ledger.json")),
            Some(ExportFormat::Json)
        );
        assert_eq!(ExportFormat::from_path(Path::new("ledger")), None);
        assert_eq!(ExportFormat::from_path(Path::new("ledger.txt")), None);
    }

    #[test]
    fn test_export_dispatch() {
        let controller = BudgetController::new();
        let mut buffer = Vec::new();
        export_ledger(&controller, ExportFormat::Csv, &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("ID,"));
    }
}
