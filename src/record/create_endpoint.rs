//! Defines the endpoint for adding a new income or expense.

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::record::{
    Record, RecordFields, RecordKind, RecordStore,
    validation::{fields_from_json, validate},
};

/// The response body for a record that was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRecordResponse {
    /// For example, "Income Added".
    pub message: String,
    /// The record as stored.
    pub record: Record,
}

/// A route handler for adding a record of `kind`, responds with the stored record.
///
/// Validation happens before anything is written to the store.
pub async fn add_record_endpoint<S>(
    State(store): State<S>,
    Extension(kind): Extension<RecordKind>,
    body: Result<Json<RecordFields>, JsonRejection>,
) -> Response
where
    S: RecordStore,
{
    let record = match fields_from_json(body).and_then(validate) {
        Ok(record) => record,
        Err(error) => {
            tracing::debug!("Rejected new {kind}: {error}");
            return error.into_response();
        }
    };

    match store.insert(kind, record, OffsetDateTime::now_utc()) {
        Ok(record) => {
            tracing::info!("Added {kind} {}", record.id);

            (
                StatusCode::OK,
                Json(AddRecordResponse {
                    message: format!("{} Added", kind.label()),
                    record,
                }),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("Could not add {kind}: {error}");
            error.into_response()
        }
    }
}
