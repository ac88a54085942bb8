//! Spending Report
//!
//! Breaks the ledger's total spend down by category.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{Category, Money};
use crate::services::Ledger;

/// Spending for one category
#[derive(Debug, Clone)]
pub struct SpendingByCategory {
    pub category: Category,
    pub total_spending: Money,
    pub transaction_count: usize,
    /// Share of total spending, 0-100
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Categories in the order they were first used
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_transactions: usize,
}

impl SpendingReport {
    /// Generate a spending report for the whole ledger
    pub fn generate(ledger: &Ledger) -> Self {
        let total_spending = ledger.total_spent();

        let categories = ledger
            .total_by_category()
            .into_iter()
            .map(|entry| SpendingByCategory {
                percentage: percentage_of(entry.total, total_spending),
                category: entry.category,
                total_spending: entry.total,
                transaction_count: entry.transaction_count,
            })
            .collect();

        Self {
            categories,
            total_spending,
            total_transactions: ledger.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_text(&self, symbol: &str) -> String {
        if self.total_transactions == 0 {
            return "No spending recorded.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(52));
        output.push('\n');
        output.push_str(&format!(
            "{:20} {:>14} {:>7} {:>8}\n",
            "Category", "Spent", "Count", "Share"
        ));
        output.push_str(&"-".repeat(52));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:20} {:>14} {:>7} {:>7.1}%\n",
                truncate(row.category.as_str(), 20),
                row.total_spending.format_with_symbol(symbol),
                row.transaction_count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(52));
        output.push('\n');
        output.push_str(&format!(
            "{:20} {:>14} {:>7}\n",
            "TOTAL",
            self.total_spending.format_with_symbol(symbol),
            self.total_transactions
        ));

        output
    }
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    (part.as_decimal() * Decimal::ONE_HUNDRED)
        .checked_div(whole.as_decimal())
        .and_then(|pct| pct.to_f64())
        .unwrap_or(0.0)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}
