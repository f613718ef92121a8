use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    Error,
    ledger::{DEFAULT_HISTORY_LIMIT, Ledger},
    record::{RecordKind, RecordStore},
};

/// Sent when `limit` is not a whole number.
pub(crate) const INVALID_LIMIT_MESSAGE: &str = "Limit must be a non-negative whole number!";

/// The query parameters for the summary endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    /// How many records to include in the history.
    pub limit: Option<usize>,
}

/// A route handler for the totals and recent history of every record.
pub async fn get_summary_endpoint<S>(
    State(store): State<S>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Response
where
    S: RecordStore,
{
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!("Rejected summary query: {rejection}");
            return Error::Validation(INVALID_LIMIT_MESSAGE.to_owned()).into_response();
        }
    };

    match load_ledger(&store) {
        Ok(ledger) => {
            Json(ledger.summary(query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT))).into_response()
        }
        Err(error) => {
            tracing::error!("Could not load records for the summary: {error}");
            error.into_response()
        }
    }
}

fn load_ledger(store: &impl RecordStore) -> Result<Ledger, Error> {
    let incomes = store.find_all(RecordKind::Income)?;
    let expenses = store.find_all(RecordKind::Expense)?;

    Ok(Ledger::new(incomes, expenses))
}
