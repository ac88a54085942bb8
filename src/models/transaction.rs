//! Transaction model
//!
//! An admitted expense. Fields are private so a transaction cannot change
//! after it has been created.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    description: String,
    /// Exact parsed value used for totals
    amount: Money,
    /// The amount exactly as the user typed it (trimmed)
    amount_text: String,
    category: Category,
    date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        amount_text: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            amount_text: amount_text.into(),
            category,
            date,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The amount as originally entered, for display
    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
