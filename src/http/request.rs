//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) unless the client sent one
//! - Enforce the Content-Length contract
//! - Read exactly the declared number of body bytes

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::response::RequestError;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Read the request ID set by the request-ID layer.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Parse the declared body length.
///
/// A missing header and a value that is not a non-negative integer are
/// rejected separately.
pub fn declared_content_length(headers: &HeaderMap) -> Result<u64, RequestError> {
    let value = headers
        .get(header::CONTENT_LENGTH)
        .ok_or(RequestError::MissingContentLength)?;

    value
        .to_str()
        .ok()
        .map(str::trim)
        .and_then(|v| v.parse::<u64>().ok())
        .ok_or_else(|| {
            RequestError::InvalidContentLength(String::from_utf8_lossy(value.as_bytes()).into_owned())
        })
}

/// Read the whole body and check it against the declared length.
///
/// A stream that ends early surfaces as `IncompleteBody`; the body size is
/// bounded by the body-limit layer in front of the handler.
pub async fn read_body(body: Body, declared: u64) -> Result<Bytes, RequestError> {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| RequestError::IncompleteBody(e.to_string()))?;

    let received = bytes.len() as u64;
    if received != declared {
        return Err(RequestError::LengthMismatch { declared, received });
    }

    Ok(bytes)
}
