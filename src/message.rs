//! The JSON body used for status messages, e.g. `{"message": "Income Added"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The message sent when a route or record does not exist.
pub(crate) const NOT_FOUND: &str = "Not Found";
/// The message sent when a route exists but does not accept the request method.
pub(crate) const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
/// The message sent when a request body is too long.
pub(crate) const PAYLOAD_TOO_LARGE: &str = "Payload Too Large";
/// The message sent for any failure that is not the client's fault.
pub(crate) const SERVER_ERROR: &str = "Server Error";

/// A human readable status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The text of the message.
    pub message: String,
}

impl Message {
    /// Create a new message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Respond with `status` and `message` as a JSON [Message] body.
pub(crate) fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(Message::new(message))).into_response()
}
