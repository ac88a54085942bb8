//! Budget display formatting

use crate::error::ExpenseError;
use crate::models::Money;
use crate::services::BudgetController;

/// The remaining-budget status line
pub fn format_remaining(remaining: Money, symbol: &str) -> String {
    format!("Remaining Budget: {}", remaining.format_with_symbol(symbol))
}

/// Ceiling, spend and remaining balance as a short block
pub fn format_budget_status(controller: &BudgetController, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Budget:   {:>14}\n",
        controller.budget_ceiling().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Spent:    {:>14}  ({} expenses)\n",
        controller.total_spent().format_with_symbol(symbol),
        controller.all().len()
    ));
    output.push_str(&format_remaining(controller.remaining_budget(), symbol));
    output.push('\n');
    output
}

/// Warning line for a rejected operation
pub fn format_warning(err: &ExpenseError) -> String {
    format!("Warning [{}]: {}", err.title(), err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ExpenseRequest;
    use chrono::NaiveDate;

    #[test]
    fn test_format_remaining() {
        assert_eq!(
            format_remaining(Money::from_cents(8750), "$"),
            "Remaining Budget: $87.50"
        );
        assert_eq!(
            format_remaining(Money::from_cents(-125), "$"),
            "Remaining Budget: -$1.25"
        );
    }

    #[test]
    fn test_format_budget_status() {
        let mut controller = BudgetController::new();
        controller.set_budget("100").unwrap();
        controller
            .add_expense(
                ExpenseRequest::new("Lunch", "12.50")
                    .category("Food")
                    .date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            )
            .unwrap();

        let output = format_budget_status(&controller, "$");
        assert!(output.contains("$100.00"));
        assert!(output.contains("$12.50"));
        assert!(output.contains("(1 expenses)"));
        assert!(output.ends_with("Remaining Budget: $87.50\n"));
    }

    #[test]
    fn test_format_warning() {
        let err = ExpenseError::BudgetExceeded {
            requested: Money::from_cents(20000),
            remaining: Money::from_cents(8750),
        };
        assert_eq!(
            format_warning(&err),
            "Warning [Insufficient Budget]: Expense of $200.00 exceeds the remaining budget of $87.50"
        );
    }
}
