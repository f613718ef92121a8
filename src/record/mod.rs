//! Income and expense records.
//!
//! This module contains everything related to records:
//! - The `Record` model and the `RecordKind` that tells incomes and expenses apart
//! - Validation of candidate records before they are stored
//! - The `RecordStore` trait and its SQLite implementation
//! - The route handlers for adding, listing, updating and deleting records

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod kind;
mod list_endpoint;
mod store;
mod validation;

pub use core::{Record, create_record_table};
pub use create_endpoint::add_record_endpoint;
pub use delete_endpoint::delete_record_endpoint;
pub use edit_endpoint::update_record_endpoint;
pub use kind::RecordKind;
pub use list_endpoint::get_records_endpoint;
pub use store::{RecordStore, SQLiteRecordStore};
pub use validation::{RecordFields, ValidRecord, validate};

#[cfg(test)]
pub(crate) mod test_utils;
