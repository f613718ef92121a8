//! Database ID type definition.

/// Alias for the integer type used for income and expense record IDs.
pub type RecordId = i64;
