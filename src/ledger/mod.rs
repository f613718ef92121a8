//! Totals and recent history computed from a snapshot of records.
//!
//! A [Ledger] owns the incomes and expenses that were last loaded from the
//! store or the API and answers every query from that snapshot. Nothing is
//! cached: each query is recomputed from the records.

mod aggregation;
mod summary_endpoint;

pub use aggregation::{DEFAULT_HISTORY_LIMIT, Ledger, Summary};
pub use summary_endpoint::get_summary_endpoint;
