use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Tells the two collections of records apart.
///
/// Incomes add to the balance and expenses subtract from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl RecordKind {
    /// Both kinds, incomes first.
    pub const ALL: [RecordKind; 2] = [RecordKind::Income, RecordKind::Expense];

    /// The capitalised name used in response messages, e.g. "Income Added".
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Income => "Income",
            RecordKind::Expense => "Expense",
        }
    }

    /// The name of the SQL table holding records of this kind.
    pub(crate) fn table_name(self) -> &'static str {
        match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expense",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}
