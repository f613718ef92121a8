//! Defines the record model and the database queries for records.

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, UtcOffset};

use crate::{
    Error,
    database_id::RecordId,
    record::{RecordKind, ValidRecord},
};

// ============================================================================
// MODELS
// ============================================================================

/// An income or expense, i.e. an event where money was either earned or spent.
///
/// Records are created from a [ValidRecord], so `amount` is always greater
/// than zero and the text fields are never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// The ID of the record, unique within its kind.
    pub id: RecordId,
    /// Whether this record is an income or an expense.
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// A short label for the record.
    pub title: String,
    /// The amount of money earned or spent.
    pub amount: f64,
    /// What sort of income or expense this is, e.g. "Salary" or "Groceries".
    pub category: String,
    /// A text description of what the record was for.
    pub description: String,
    /// When the money moved.
    pub date: Date,
    /// When the record was stored. Used for ordering.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

const RECORD_COLUMNS: &str = "id, title, amount, category, description, date, created_at";

/// Create a new record of `kind` in the database.
///
/// `created_at` is stored in UTC.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn insert_record(
    kind: RecordKind,
    record: ValidRecord,
    created_at: OffsetDateTime,
    connection: &Connection,
) -> Result<Record, Error> {
    let record = connection
        .prepare(&format!(
            "INSERT INTO {} (title, amount, category, description, date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {RECORD_COLUMNS}",
            kind.table_name()
        ))?
        .query_row(
            params![
                record.title,
                record.amount,
                record.category,
                record.description,
                record.date,
                created_at.to_offset(UtcOffset::UTC),
            ],
            |row| map_record_row(kind, row),
        )?;

    Ok(record)
}

/// Retrieve a record of `kind` from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid record,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_record(
    kind: RecordKind,
    id: RecordId,
    connection: &Connection,
) -> Result<Record, Error> {
    let record = connection
        .prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM {} WHERE id = :id",
            kind.table_name()
        ))?
        .query_row(&[(":id", &id)], |row| map_record_row(kind, row))?;

    Ok(record)
}

/// Retrieve all records of `kind`, newest first.
///
/// Records created at the same instant are ordered by ID, highest first.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn list_records(kind: RecordKind, connection: &Connection) -> Result<Vec<Record>, Error> {
    connection
        .prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM {} ORDER BY created_at DESC, id DESC",
            kind.table_name()
        ))?
        .query_map([], |row| map_record_row(kind, row))?
        .map(|maybe_record| maybe_record.map_err(Error::from))
        .collect()
}

/// Replace the fields of the record of `kind` with `id`.
///
/// The ID and creation time are left unchanged.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid record,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_record(
    kind: RecordKind,
    id: RecordId,
    record: ValidRecord,
    connection: &Connection,
) -> Result<Record, Error> {
    let record = connection
        .prepare(&format!(
            "UPDATE {}
             SET title = ?1, amount = ?2, category = ?3, description = ?4, date = ?5
             WHERE id = ?6
             RETURNING {RECORD_COLUMNS}",
            kind.table_name()
        ))?
        .query_row(
            params![
                record.title,
                record.amount,
                record.category,
                record.description,
                record.date,
                id,
            ],
            |row| map_record_row(kind, row),
        )?;

    Ok(record)
}

type RowsAffected = usize;

/// Delete the record of `kind` with `id`.
///
/// Returns the number of rows deleted, zero if there was no such record.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn delete_record(
    kind: RecordKind,
    id: RecordId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            &format!("DELETE FROM {} WHERE id = :id", kind.table_name()),
            &[(":id", &id)],
        )
        .map_err(Error::from)
}

/// Create the table for records of `kind` in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_record_table(
    kind: RecordKind,
    connection: &Connection,
) -> Result<(), rusqlite::Error> {
    let table = kind.table_name();

    connection.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL CHECK (length(title) > 0),
                amount REAL NOT NULL CHECK (amount > 0),
                category TEXT NOT NULL CHECK (length(category) > 0),
                description TEXT NOT NULL CHECK (length(description) > 0),
                date TEXT NOT NULL,
                created_at TEXT NOT NULL
                )"
        ),
        (),
    )?;

    // Used for listing records newest first.
    connection.execute(
        &format!("CREATE INDEX IF NOT EXISTS idx_{table}_created_at ON {table}(created_at);"),
        (),
    )?;

    Ok(())
}

/// Map a database row to a [Record] of `kind`.
fn map_record_row(kind: RecordKind, row: &Row) -> Result<Record, rusqlite::Error> {
    Ok(Record {
        id: row.get(0)?,
        kind,
        title: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        description: row.get(4)?,
        date: row.get(5)?,
        created_at: row.get(6)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
