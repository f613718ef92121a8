use axum::{http::StatusCode, response::Response};

use crate::message::{METHOD_NOT_ALLOWED, NOT_FOUND, message_response};

/// The fallback route handler for paths that do not match any route.
pub async fn get_404_not_found() -> Response {
    message_response(StatusCode::NOT_FOUND, NOT_FOUND)
}

/// The fallback route handler for routes called with the wrong method.
pub async fn get_405_method_not_allowed() -> Response {
    message_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}
