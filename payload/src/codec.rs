//! URL transport for [`AgentChatWindowInput`].
//!
//! Two query parameters are understood:
//!
//! - `encoded`: standard base64 of the JSON document.
//! - `data`: the JSON document itself, percent-encoded on top of the normal
//!   query-string encoding (the widget decodes it one extra time).
//!
//! Decoding is lenient about base64 padding and about `+` characters that a
//! form decoder has already turned into spaces. Everything else is an error
//! for the caller to treat as "source absent".

use std::string::FromUtf8Error;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::AgentChatWindowInput;

/// Standard alphabet; emits padding, accepts input with or without it.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Error returned when a query payload cannot be turned into an input.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Query parameter carrying a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryParam {
    /// Base64 JSON. Checked first.
    Encoded,
    /// Percent-encoded JSON.
    Data,
}

impl QueryParam {
    /// Parameter name as it appears in the URL.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Encoded => "encoded",
            Self::Data => "data",
        }
    }
}

/// Parse a JSON document into an input.
///
/// # Errors
///
/// Returns [`PayloadError::Json`] when the text is not valid JSON or does not
/// match the schema (for example, `messages` is missing).
pub fn parse_json(text: &str) -> Result<AgentChatWindowInput, PayloadError> {
    Ok(serde_json::from_str(text)?)
}

/// Serialize an input to compact JSON and base64-encode it.
///
/// # Errors
///
/// Returns [`PayloadError::Json`] if serialization fails.
pub fn encode_base64(input: &AgentChatWindowInput) -> Result<String, PayloadError> {
    let json = serde_json::to_string(input)?;
    Ok(BASE64.encode(json))
}

/// Decode the value of an `encoded` parameter.
///
/// # Errors
///
/// Fails on malformed base64, non-UTF-8 bytes, or invalid JSON.
pub fn decode_base64(raw: &str) -> Result<AgentChatWindowInput, PayloadError> {
    let restored = raw.trim().replace(' ', "+");
    let bytes = BASE64.decode(restored)?;
    let text = String::from_utf8(bytes)?;
    parse_json(&text)
}

/// Decode the value of a `data` parameter.
///
/// # Errors
///
/// Fails when percent-decoding yields non-UTF-8 bytes or the JSON is invalid.
pub fn decode_url_json(raw: &str) -> Result<AgentChatWindowInput, PayloadError> {
    let text = urlencoding::decode(raw)?;
    parse_json(&text)
}

/// Form-decode one query-string component: `+` becomes a space, then
/// percent-escapes are resolved.
///
/// # Errors
///
/// Returns [`PayloadError::Utf8`] when the escapes do not form valid UTF-8.
pub fn form_decode(component: &str) -> Result<String, PayloadError> {
    let spaced = component.replace('+', " ");
    Ok(urlencoding::decode(&spaced)?.into_owned())
}

/// Build a widget URL carrying `json` in the given parameter.
///
/// `json` is embedded as-is, so callers decide whether to re-serialize it.
#[must_use]
pub fn widget_url(base_url: &str, param: QueryParam, json: &str) -> String {
    let value = match param {
        QueryParam::Encoded => urlencoding::encode(&BASE64.encode(json)).into_owned(),
        QueryParam::Data => urlencoding::encode(&urlencoding::encode(json)).into_owned(),
    };
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}{}={value}", param.name())
}

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;
