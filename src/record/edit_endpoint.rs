use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    database_id::RecordId,
    record::{
        RecordFields, RecordKind, RecordStore,
        delete_endpoint::not_found_response,
        validation::{fields_from_json, validate},
    },
};

/// A route handler for replacing the fields of a record of `kind`.
///
/// Responds with the updated record.
///
/// The fields are validated with the same rule used when adding a record.
pub async fn update_record_endpoint<S>(
    State(store): State<S>,
    Extension(kind): Extension<RecordKind>,
    record_id: Result<Path<RecordId>, PathRejection>,
    body: Result<Json<RecordFields>, JsonRejection>,
) -> Response
where
    S: RecordStore,
{
    let Ok(Path(record_id)) = record_id else {
        return not_found_response(kind);
    };

    let record = match fields_from_json(body).and_then(validate) {
        Ok(record) => record,
        Err(error) => {
            tracing::debug!("Rejected update to {kind} {record_id}: {error}");
            return error.into_response();
        }
    };

    match store.update_by_id(kind, record_id, record) {
        Ok(record) => {
            tracing::info!("Updated {kind} {record_id}");
            Json(record).into_response()
        }
        Err(Error::NotFound) => {
            tracing::debug!("Tried to update {kind} {record_id}, which does not exist");
            not_found_response(kind)
        }
        Err(error) => {
            tracing::error!("Could not update {kind} {record_id}: {error}");
            error.into_response()
        }
    }
}
