//! Ledger of admitted expenses
//!
//! An insertion-ordered, append-only list of transactions. The ledger does
//! no validation of its own; admission rules live in the budget controller.

use crate::models::{Category, Money, Transaction};

/// Aggregate spend for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    pub transaction_count: usize,
}

/// Ordered collection of admitted transactions
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction
    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Sum of all stored amounts, recomputed on every call
    pub fn total_spent(&self) -> Money {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    /// Read-only view of all transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Totals per category, in the order each category was first used
    pub fn total_by_category(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for txn in &self.transactions {
            match totals.iter_mut().find(|t| &t.category == txn.category()) {
                Some(entry) => {
                    entry.total += txn.amount();
                    entry.transaction_count += 1;
                }
                None => totals.push(CategoryTotal {
                    category: txn.category().clone(),
                    total: txn.amount(),
                    transaction_count: 1,
                }),
            }
        }

        totals
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
