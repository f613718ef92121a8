use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::record::{RecordKind, RecordStore};

/// A route handler for listing every record of `kind`, newest first.
pub async fn get_records_endpoint<S>(
    State(store): State<S>,
    Extension(kind): Extension<RecordKind>,
) -> Response
where
    S: RecordStore,
{
    match store.find_all(kind) {
        Ok(records) => Json(records).into_response(),
        Err(error) => {
            tracing::error!("Could not list {kind} records: {error}");
            error.into_response()
        }
    }
}
