//! An HTTP client for the finance tracker API.
//!
//! [LedgerClient] keeps a local [Ledger] of the incomes and expenses on the
//! server and fetches a kind of record again after every change to it, so
//! totals and history computed from the ledger reflect the server.

use reqwest::{RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Message, RecordId,
    endpoints::{self, format_endpoint},
    ledger::Ledger,
    record::{Record, RecordKind},
};

/// The errors that may occur when calling the API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server responded with an error status.
    ///
    /// `message` holds the server's explanation if it sent one.
    #[error("the server responded with {status}")]
    Response {
        /// The HTTP status of the response.
        status: StatusCode,
        /// The `message` field of the response body.
        message: Option<String>,
    },
}

impl ClientError {
    /// The message sent by the server, e.g. "All fields are required!".
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Response {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

/// The fields for adding or updating a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    /// A short label for the record.
    pub title: String,
    /// How much money was earned or spent.
    pub amount: f64,
    /// What sort of income or expense this is.
    pub category: String,
    /// Free text describing the record.
    pub description: String,
    /// When the money moved.
    pub date: Date,
}

/// A client that mirrors the server's records in a local [Ledger].
#[derive(Debug, Clone)]
pub struct LedgerClient {
    http: reqwest::Client,
    base_url: String,
    ledger: Ledger,
    error: Option<String>,
}

impl LedgerClient {
    /// Create a client for the server at `base_url`, e.g. "http://localhost:9000".
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Create a client that sends requests with `http`.
    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            ledger: Ledger::default(),
            error: None,
        }
    }

    /// The records fetched most recently.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// A message describing the last failed call, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Forget the last error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Add a record of `kind`, then fetch that kind again.
    pub async fn add(&mut self, kind: RecordKind, record: &NewRecord) -> Result<(), ClientError> {
        let request = self.http.post(self.url(endpoints::add_endpoint(kind)));
        let result = send(request.json(record)).await;

        self.finish_change(kind, "adding", result).await
    }

    /// Replace the records of `kind` in the ledger with those on the server.
    pub async fn fetch(&mut self, kind: RecordKind) -> Result<(), ClientError> {
        let request = self.http.get(self.url(endpoints::list_endpoint(kind)));

        let records = match send(request).await {
            Ok(response) => response.json::<Vec<Record>>().await.map_err(ClientError::from),
            Err(error) => Err(error),
        };

        match records {
            Ok(records) => {
                self.ledger.set_records(kind, records);
                Ok(())
            }
            Err(error) => {
                tracing::error!("Could not fetch {kind} records: {error}");
                self.error = Some(format!(
                    "An unexpected error occurred while fetching {kind} records"
                ));
                Err(error)
            }
        }
    }

    /// Fetch both kinds of record.
    ///
    /// Stops at the first failure.
    pub async fn fetch_all(&mut self) -> Result<(), ClientError> {
        for kind in RecordKind::ALL {
            self.fetch(kind).await?;
        }

        Ok(())
    }

    /// Delete the record of `kind` with `id`, then fetch that kind again.
    pub async fn delete(&mut self, kind: RecordKind, id: RecordId) -> Result<(), ClientError> {
        let path = format_endpoint(endpoints::delete_endpoint(kind), id);
        let result = send(self.http.delete(self.url(&path))).await;

        self.finish_change(kind, "deleting", result).await
    }

    /// Replace the fields of the record of `kind` with `id`, then fetch that kind again.
    pub async fn update(
        &mut self,
        kind: RecordKind,
        id: RecordId,
        record: &NewRecord,
    ) -> Result<(), ClientError> {
        let path = format_endpoint(endpoints::update_endpoint(kind), id);
        let result = send(self.http.put(self.url(&path)).json(record)).await;

        self.finish_change(kind, "updating", result).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn finish_change(
        &mut self,
        kind: RecordKind,
        action: &str,
        result: Result<reqwest::Response, ClientError>,
    ) -> Result<(), ClientError> {
        match result {
            Ok(_) => self.fetch(kind).await,
            Err(error) => {
                tracing::error!("Failed {action} {kind}: {error}");
                self.error = Some(match error.server_message() {
                    Some(message) => message.to_owned(),
                    None => format!("An unexpected error occurred while {action} {kind}"),
                });
                Err(error)
            }
        }
    }
}

/// Send `request`, turning an error status into a [ClientError::Response].
async fn send(request: RequestBuilder) -> Result<reqwest::Response, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<Message>()
        .await
        .ok()
        .map(|body| body.message);

    Err(ClientError::Response { status, message })
}
