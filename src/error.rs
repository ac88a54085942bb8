//! Custom error types for the expense tracker
//!
//! The budget core reports every rejected operation as an [`ExpenseError`];
//! the shell decides how to surface it. None of these errors are fatal.

use std::fmt;

use thiserror::Error;

use crate::models::money::{Money, MoneyParseError};

/// Which numeric field failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Budget,
    Amount,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Budget => write!(f, "budget"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

/// Why a numeric field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberProblem {
    /// The text is not a decimal number at all
    NotANumber,
    /// The value is too large (or too precise) to represent exactly
    OutOfRange,
    /// Expense amounts must be greater than zero
    NotPositive,
}

impl fmt::Display for NumberProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "is not a valid number"),
            Self::OutOfRange => write!(f, "is out of range"),
            Self::NotPositive => write!(f, "must be greater than zero"),
        }
    }
}

impl From<&MoneyParseError> for NumberProblem {
    fn from(err: &MoneyParseError) -> Self {
        match err {
            MoneyParseError::Empty | MoneyParseError::InvalidFormat(_) => Self::NotANumber,
            MoneyParseError::OutOfRange(_) => Self::OutOfRange,
        }
    }
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// One or more required fields were missing or blank
    #[error("Incomplete information: please fill in {}", .missing.join(", "))]
    IncompleteInput { missing: Vec<&'static str> },

    /// A numeric field did not parse as a finite decimal
    #[error("Invalid {field}: '{input}' {problem}")]
    InvalidNumber {
        field: NumericField,
        input: String,
        problem: NumberProblem,
    },

    /// The expense would take the remaining budget below zero
    #[error("Expense of {requested} exceeds the remaining budget of {remaining}")]
    BudgetExceeded { requested: Money, remaining: Money },

    /// Category outside the standard set while strict categories are on
    #[error("Unknown category '{0}': expected one of Food, Transport, Entertainment, Shopping, Utilities, Other")]
    UnknownCategory(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Build an `InvalidNumber` error from a money parse failure
    pub fn invalid_number(
        field: NumericField,
        input: impl Into<String>,
        err: &MoneyParseError,
    ) -> Self {
        Self::InvalidNumber {
            field,
            input: input.into(),
            problem: err.into(),
        }
    }

    /// Short title for the warning the shell shows
    pub fn title(&self) -> &'static str {
        match self {
            Self::IncompleteInput { .. } => "Incomplete Information",
            Self::InvalidNumber {
                field: NumericField::Budget,
                ..
            } => "Invalid Budget",
            Self::InvalidNumber {
                field: NumericField::Amount,
                ..
            } => "Invalid Amount",
            Self::BudgetExceeded { .. } => "Insufficient Budget",
            Self::UnknownCategory(_) => "Unknown Category",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
            Self::Export(_) => "Export Failed",
        }
    }

    /// Check if this is an incomplete input error
    pub fn is_incomplete_input(&self) -> bool {
        matches!(self, Self::IncompleteInput { .. })
    }

    /// Check if this is an invalid number error
    pub fn is_invalid_number(&self) -> bool {
        matches!(self, Self::InvalidNumber { .. })
    }

    /// Check if this is a budget exceeded error
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self, Self::BudgetExceeded { .. })
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_input_display() {
        let err = ExpenseError::IncompleteInput {
            missing: vec!["description", "category"],
        };
        assert_eq!(
            err.to_string(),
            "Incomplete information: please fill in description, category"
        );
        assert!(err.is_incomplete_input());
        assert_eq!(err.title(), "Incomplete Information");
    }

    #[test]
    fn test_invalid_number_display() {
        let err = ExpenseError::InvalidNumber {
            field: NumericField::Amount,
            input: "abc".into(),
            problem: NumberProblem::NotANumber,
        };
        assert_eq!(err.to_string(), "Invalid amount: 'abc' is not a valid number");
        assert_eq!(err.title(), "Invalid Amount");

        let err = ExpenseError::InvalidNumber {
            field: NumericField::Budget,
            input: String::new(),
            problem: NumberProblem::NotANumber,
        };
        assert_eq!(err.title(), "Invalid Budget");
    }

    #[test]
    fn test_budget_exceeded_display() {
        let err = ExpenseError::BudgetExceeded {
            requested: Money::from_cents(20000),
            remaining: Money::from_cents(8750),
        };
        assert_eq!(
            err.to_string(),
            "Expense of $200.00 exceeds the remaining budget of $87.50"
        );
        assert!(err.is_budget_exceeded());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
        assert_eq!(err.title(), "I/O Error");
    }
}
