//! Budget controller
//!
//! Owns the budget ceiling and the ledger, and is the only way to change
//! either. The remaining budget is never stored: it is always
//! `ceiling - ledger.total_spent()`, so no caller can observe a stale value.
//!
//! Every operation validates fully before mutating anything, so a rejected
//! call leaves the ceiling and the ledger exactly as they were.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult, NumberProblem, NumericField};
use crate::models::{Category, CategoryPolicy, Money, Transaction};
use crate::services::ledger::Ledger;

/// Raw field values collected by the shell for a new expense
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseRequest<'a> {
    pub description: &'a str,
    pub amount: &'a str,
    pub category: Option<&'a str>,
    pub date: Option<NaiveDate>,
}

impl<'a> ExpenseRequest<'a> {
    pub fn new(description: &'a str, amount: &'a str) -> Self {
        Self {
            description,
            amount,
            ..Self::default()
        }
    }

    pub fn category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Result of a successful admission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    pub transaction: Transaction,
    pub remaining: Money,
}

/// Gatekeeper for the budget ceiling and the ledger
#[derive(Debug, Clone, Default)]
pub struct BudgetController {
    ceiling: Money,
    ledger: Ledger,
    policy: CategoryPolicy,
}

impl BudgetController {
    /// Create a controller with a zero budget and an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with a specific category policy
    pub fn with_policy(policy: CategoryPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn budget_ceiling(&self) -> Money {
        self.ceiling
    }

    pub fn policy(&self) -> CategoryPolicy {
        self.policy
    }

    /// Ceiling minus everything admitted so far
    pub fn remaining_budget(&self) -> Money {
        self.ceiling.saturating_sub(self.ledger.total_spent())
    }

    pub fn total_spent(&self) -> Money {
        self.ledger.total_spent()
    }

    /// Admitted transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        self.ledger.all()
    }

    /// Read-only access to the ledger for display and reports
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Set the budget ceiling from raw text and return the new remaining budget
    ///
    /// Any finite decimal is accepted, including zero and negative values,
    /// as long as `ceiling - spent` is exactly representable.
    pub fn set_budget(&mut self, raw_input: &str) -> ExpenseResult<Money> {
        let input = raw_input.trim();
        let ceiling = Money::parse(input)
            .map_err(|e| ExpenseError::invalid_number(NumericField::Budget, input, &e))?;

        let remaining = ceiling
            .exact_sub(self.ledger.total_spent())
            .ok_or_else(|| ExpenseError::InvalidNumber {
                field: NumericField::Budget,
                input: input.to_string(),
                problem: NumberProblem::OutOfRange,
            })?;

        self.ceiling = ceiling;
        Ok(remaining)
    }

    /// Validate and admit a new expense
    ///
    /// Checks run in a fixed order and the first failure wins: missing
    /// fields, then the amount's number format, then the category policy,
    /// then the remaining budget. An amount equal to the remaining budget is
    /// admitted. An amount whose admission would leave a balance that cannot
    /// be represented exactly is rejected as out of range.
    pub fn add_expense(&mut self, request: ExpenseRequest<'_>) -> ExpenseResult<Admission> {
        let description = request.description.trim();
        let amount_text = request.amount.trim();
        let category = request.category.and_then(Category::parse);

        let missing = missing_fields(
            description,
            amount_text,
            category.is_none(),
            request.date.is_none(),
        );
        let (Some(category), Some(date), true) = (category, request.date, missing.is_empty())
        else {
            return Err(ExpenseError::IncompleteInput { missing });
        };

        let amount = Money::parse(amount_text)
            .map_err(|e| ExpenseError::invalid_number(NumericField::Amount, amount_text, &e))?;
        if !amount.is_positive() {
            return Err(ExpenseError::InvalidNumber {
                field: NumericField::Amount,
                input: amount_text.to_string(),
                problem: NumberProblem::NotPositive,
            });
        }

        if !self.policy.allows(&category) {
            return Err(ExpenseError::UnknownCategory(category.as_str().to_string()));
        }

        let remaining = self.remaining_budget();
        if amount > remaining {
            return Err(ExpenseError::BudgetExceeded {
                requested: amount,
                remaining,
            });
        }

        self.ledger
            .total_spent()
            .exact_add(amount)
            .and_then(|spent| self.ceiling.exact_sub(spent))
            .ok_or_else(|| ExpenseError::InvalidNumber {
                field: NumericField::Amount,
                input: amount_text.to_string(),
                problem: NumberProblem::OutOfRange,
            })?;

        let transaction = Transaction::new(description, amount, amount_text, category, date);
        self.ledger.add(transaction.clone());

        Ok(Admission {
            transaction,
            remaining: self.remaining_budget(),
        })
    }
}

fn missing_fields(
    description: &str,
    amount: &str,
    no_category: bool,
    no_date: bool,
) -> Vec<&'static str> {
    [
        ("description", description.is_empty()),
        ("amount", amount.is_empty()),
        ("category", no_category),
        ("date", no_date),
    ]
    .into_iter()
    .filter_map(|(name, missing)| missing.then_some(name))
    .collect()
}
