//! Classification of a received body.

use serde_json::Value;

/// Whether JSON parsing is attempted before falling back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadMode {
    /// Parse as JSON, fall back to raw text on failure.
    #[default]
    Structured,
    /// Always log raw text.
    Raw,
}

/// Body bytes decoded as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    /// False when the bytes were not UTF-8 and had to be decoded lossily.
    pub valid_utf8: bool,
}

impl DecodedText {
    pub fn decode(bytes: &[u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => Self {
                text: text.to_owned(),
                valid_utf8: true,
            },
            Err(_) => Self {
                text: String::from_utf8_lossy(bytes).into_owned(),
                valid_utf8: false,
            },
        }
    }
}

/// A received body, ready to be logged.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Valid UTF-8 that parsed as a JSON document.
    Json(Value),
    /// Parsing was attempted and failed.
    NonJson(DecodedText),
    /// Parsing was not attempted.
    Raw(DecodedText),
}

impl Payload {
    /// Classify `bytes` according to `mode`. Never fails: anything that is not
    /// JSON is kept as text.
    pub fn classify(bytes: &[u8], mode: PayloadMode) -> Self {
        let decoded = DecodedText::decode(bytes);

        match mode {
            PayloadMode::Raw => Payload::Raw(decoded),
            PayloadMode::Structured if !decoded.valid_utf8 => Payload::NonJson(decoded),
            PayloadMode::Structured => match serde_json::from_str::<Value>(&decoded.text) {
                Ok(value) => Payload::Json(value),
                Err(e) => {
                    tracing::trace!(error = %e, "Body is not JSON");
                    Payload::NonJson(decoded)
                }
            },
        }
    }
}
