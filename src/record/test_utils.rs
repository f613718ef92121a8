#![allow(missing_docs)]

use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use serde_json::json;
use time::OffsetDateTime;

use crate::{
    Error, RecordId,
    db::initialize,
    record::{
        Record, RecordFields, RecordKind, RecordStore, SQLiteRecordStore, ValidRecord, validate,
    },
};

pub(crate) fn get_test_connection() -> Connection {
    let conn = Connection::open_in_memory().expect("could not create in-memory SQLite database");
    initialize(&conn).expect("could not initialize test DB");
    conn
}

pub(crate) fn get_test_store() -> SQLiteRecordStore {
    SQLiteRecordStore::new(Arc::new(Mutex::new(get_test_connection())))
}

pub(crate) fn fields(title: &str, amount: f64, date: &str) -> RecordFields {
    RecordFields {
        title: Some(title.to_owned()),
        amount: Some(json!(amount)),
        category: Some("test".to_owned()),
        description: Some(format!("{title} description")),
        date: Some(date.to_owned()),
    }
}

#[track_caller]
pub(crate) fn must_validate(title: &str, amount: f64, date: &str) -> ValidRecord {
    validate(fields(title, amount, date)).expect("test record fields are invalid")
}

/// A store where every operation fails as if the database were unavailable.
#[derive(Debug, Clone)]
pub(crate) struct BrokenStore;

impl RecordStore for BrokenStore {
    fn insert(
        &self,
        _kind: RecordKind,
        _record: ValidRecord,
        _created_at: OffsetDateTime,
    ) -> Result<Record, Error> {
        Err(Error::DatabaseLockError)
    }

    fn find_all(&self, _kind: RecordKind) -> Result<Vec<Record>, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get_by_id(&self, _kind: RecordKind, _id: RecordId) -> Result<Record, Error> {
        Err(Error::DatabaseLockError)
    }

    fn delete_by_id(&self, _kind: RecordKind, _id: RecordId) -> Result<bool, Error> {
        Err(Error::DatabaseLockError)
    }

    fn update_by_id(
        &self,
        _kind: RecordKind,
        _id: RecordId,
        _record: ValidRecord,
    ) -> Result<Record, Error> {
        Err(Error::DatabaseLockError)
    }
}

pub(crate) async fn parse_body<T: serde::de::DeserializeOwned>(
    response: axum::response::Response,
) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("could not read response body");

    serde_json::from_slice(&bytes).expect("could not parse response body")
}
