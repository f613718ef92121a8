use axum::{
    Extension,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    database_id::RecordId,
    message::message_response,
    record::{RecordKind, RecordStore},
};

/// A route handler for deleting a record of `kind`, responds with a message.
///
/// An ID that is not an integer cannot refer to a record, so it gets the same
/// 404 response as an unknown ID.
pub async fn delete_record_endpoint<S>(
    State(store): State<S>,
    Extension(kind): Extension<RecordKind>,
    record_id: Result<Path<RecordId>, PathRejection>,
) -> Response
where
    S: RecordStore,
{
    let Ok(Path(record_id)) = record_id else {
        return not_found_response(kind);
    };

    match store.delete_by_id(kind, record_id) {
        Ok(true) => {
            tracing::info!("Deleted {kind} {record_id}");
            message_response(StatusCode::OK, format!("{} Deleted", kind.label()))
        }
        Ok(false) => {
            tracing::debug!("Tried to delete {kind} {record_id}, which does not exist");
            not_found_response(kind)
        }
        Err(error) => {
            tracing::error!("Could not delete {kind} {record_id}: {error}");
            error.into_response()
        }
    }
}

pub(crate) fn not_found_response(kind: RecordKind) -> Response {
    message_response(StatusCode::NOT_FOUND, format!("{} not found", kind.label()))
}
