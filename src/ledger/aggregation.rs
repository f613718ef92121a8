//! Record aggregation for totals and the recent-transaction history.

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordKind};

/// How many records [Ledger::transaction_history] returns by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 3;

/// A snapshot of incomes and expenses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    incomes: Vec<Record>,
    expenses: Vec<Record>,
}

/// The totals and recent history of a [Ledger], ready to be sent as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of all incomes.
    pub total_income: f64,
    /// The sum of all expenses.
    pub total_expenses: f64,
    /// Total income minus total expenses.
    pub total_balance: f64,
    /// The most recently created records of either kind, newest first.
    pub history: Vec<Record>,
}

impl Ledger {
    /// Create a ledger from the current incomes and expenses.
    pub fn new(incomes: Vec<Record>, expenses: Vec<Record>) -> Self {
        Self { incomes, expenses }
    }

    /// The records of `kind`.
    pub fn records(&self, kind: RecordKind) -> &[Record] {
        match kind {
            RecordKind::Income => &self.incomes,
            RecordKind::Expense => &self.expenses,
        }
    }

    /// Replace the records of `kind`, e.g. after fetching them again.
    pub fn set_records(&mut self, kind: RecordKind, records: Vec<Record>) {
        match kind {
            RecordKind::Income => self.incomes = records,
            RecordKind::Expense => self.expenses = records,
        }
    }

    /// The current incomes.
    pub fn incomes(&self) -> &[Record] {
        &self.incomes
    }

    /// The current expenses.
    pub fn expenses(&self) -> &[Record] {
        &self.expenses
    }

    /// The sum of all income amounts, zero if there are none.
    pub fn total_income(&self) -> f64 {
        sum_amounts(&self.incomes)
    }

    /// The sum of all expense amounts, zero if there are none.
    pub fn total_expenses(&self) -> f64 {
        sum_amounts(&self.expenses)
    }

    /// Total income minus total expenses.
    pub fn total_balance(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }

    /// The `limit` most recently created records of either kind, newest first.
    ///
    /// Records with the same `created_at` keep their relative order, incomes
    /// before expenses.
    pub fn transaction_history(&self, limit: usize) -> Vec<Record> {
        let mut history: Vec<Record> = self
            .incomes
            .iter()
            .chain(self.expenses.iter())
            .cloned()
            .collect();

        // `sort_by` is stable.
        history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        history.truncate(limit);

        history
    }

    /// Bundle the totals and the `limit` most recent records.
    pub fn summary(&self, limit: usize) -> Summary {
        Summary {
            total_income: self.total_income(),
            total_expenses: self.total_expenses(),
            total_balance: self.total_balance(),
            history: self.transaction_history(limit),
        }
    }
}

fn sum_amounts(records: &[Record]) -> f64 {
    records.iter().map(|record| record.amount).sum()
}
