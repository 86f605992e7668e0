//! Responses sent back to the client.
//!
//! Every valid POST gets the same acknowledgement. Malformed requests are
//! rejected with a 4xx, and methods other than POST with 501.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Body of the acknowledgement sent for every accepted POST.
pub const ACK_BODY: &str = "Received POST data";

/// Reasons a POST is rejected before its payload is logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Content-Length header is required")]
    MissingContentLength,

    #[error("Content-Length is not a non-negative integer: {0:?}")]
    InvalidContentLength(String),

    #[error("request body ended early: {0}")]
    IncompleteBody(String),

    #[error("request body is {received} bytes but Content-Length declared {declared}")]
    LengthMismatch { declared: u64, received: u64 },
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::MissingContentLength => StatusCode::LENGTH_REQUIRED,
            RequestError::InvalidContentLength(_)
            | RequestError::IncompleteBody(_)
            | RequestError::LengthMismatch { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// The fixed 200 acknowledgement.
pub fn acknowledge() -> Response {
    (StatusCode::OK, ACK_BODY).into_response()
}

/// Fallback for every method other than POST.
pub async fn unsupported_method(method: Method) -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        format!("Unsupported method ('{}')", method),
    )
        .into_response()
}
