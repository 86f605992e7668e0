//! Human-readable rendering of a classified payload.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use super::classify::Payload;

pub const JSON_HEADLINE: &str = "Received POST request with JSON payload:";
pub const NON_JSON_HEADLINE: &str = "Received POST request with non-JSON payload:";
pub const RAW_HEADLINE: &str = "Received POST request with payload:";

const INDENT: &[u8] = b"    ";

impl Payload {
    /// The line announcing which kind of payload arrived.
    pub fn headline(&self) -> &'static str {
        match self {
            Payload::Json(_) => JSON_HEADLINE,
            Payload::NonJson(_) => NON_JSON_HEADLINE,
            Payload::Raw(_) => RAW_HEADLINE,
        }
    }

    /// The payload itself: indented JSON, or the decoded text verbatim.
    pub fn render(&self) -> String {
        match self {
            Payload::Json(value) => pretty_json(value),
            Payload::NonJson(decoded) | Payload::Raw(decoded) => decoded.text.clone(),
        }
    }
}

/// Serialize with four-space indentation, keeping the sender's key order.
pub fn pretty_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));

    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }

    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}
