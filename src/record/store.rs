//! Defines the record store trait and a SQLite backed implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    Error,
    database_id::RecordId,
    record::{
        Record, RecordKind, ValidRecord,
        core::{delete_record, get_record, insert_record, list_records, update_record},
    },
};

/// Handles the creation, retrieval, update and deletion of records.
///
/// Each operation either takes full effect or fails with no effect.
pub trait RecordStore {
    /// Store a new record of `kind`, assigning it an ID and `created_at`.
    fn insert(
        &self,
        kind: RecordKind,
        record: ValidRecord,
        created_at: OffsetDateTime,
    ) -> Result<Record, Error>;

    /// Retrieve every record of `kind`, newest `created_at` first.
    fn find_all(&self, kind: RecordKind) -> Result<Vec<Record>, Error>;

    /// Retrieve a single record of `kind`.
    ///
    /// Returns [Error::NotFound] if there is no record with `id`.
    fn get_by_id(&self, kind: RecordKind, id: RecordId) -> Result<Record, Error>;

    /// Delete a record of `kind`, returning whether it existed.
    fn delete_by_id(&self, kind: RecordKind, id: RecordId) -> Result<bool, Error>;

    /// Replace the fields of a record of `kind`.
    ///
    /// Returns [Error::NotFound] if there is no record with `id`.
    fn update_by_id(
        &self,
        kind: RecordKind,
        id: RecordId,
        record: ValidRecord,
    ) -> Result<Record, Error>;
}

/// Stores records in a SQLite database.
///
/// The tables must have been created with [crate::initialize_db].
#[derive(Debug, Clone)]
pub struct SQLiteRecordStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteRecordStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|_| Error::DatabaseLockError)
    }
}

impl RecordStore for SQLiteRecordStore {
    fn insert(
        &self,
        kind: RecordKind,
        record: ValidRecord,
        created_at: OffsetDateTime,
    ) -> Result<Record, Error> {
        let connection = self.lock()?;

        insert_record(kind, record, created_at, &connection)
    }

    fn find_all(&self, kind: RecordKind) -> Result<Vec<Record>, Error> {
        let connection = self.lock()?;

        list_records(kind, &connection)
    }

    fn get_by_id(&self, kind: RecordKind, id: RecordId) -> Result<Record, Error> {
        let connection = self.lock()?;

        get_record(kind, id, &connection)
    }

    fn delete_by_id(&self, kind: RecordKind, id: RecordId) -> Result<bool, Error> {
        let connection = self.lock()?;
        let rows_affected = delete_record(kind, id, &connection)?;

        Ok(rows_affected > 0)
    }

    fn update_by_id(
        &self,
        kind: RecordKind,
        id: RecordId,
        record: ValidRecord,
    ) -> Result<Record, Error> {
        let connection = self.lock()?;

        update_record(kind, id, record, &connection)
    }
}
