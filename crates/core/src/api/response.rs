//! Response normalization.
//!
//! Every backend payload is first decoded into a [`ResponseShape`] and only
//! then interpreted against the HTTP status. The status is authoritative: a
//! non-2xx response fails even when its body claims `success: true`.

use promohub_domain::constants::REQUEST_FAILED_MESSAGE;
use promohub_domain::ApiError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decoded form of a raw response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// Empty or non-JSON body
    Empty,
    /// `{ "success": true, "data", "message"? }` or `{ "success": false, "message"?, "data"? }`
    Envelope { success: bool, message: Option<String>, data: Value },
    /// Unwrapped `{ "content": [...], ... }` page
    BarePage(Map<String, Value>),
    /// Unwrapped JSON array
    BareArray(Vec<Value>),
    /// Any other JSON value
    BareValue(Value),
}

impl ResponseShape {
    /// Classify a raw body. Never fails; unparseable text is [`Self::Empty`].
    pub fn decode(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => Self::Empty,
        }
    }

    /// Classify an already-parsed value
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Array(items) => Self::BareArray(items),
            Value::Object(mut map) => match map.get("success") {
                // A successful envelope must carry `data`; a failed one need not.
                Some(Value::Bool(success)) if !*success || map.contains_key("data") => {
                    let success = *success;
                    let message = map.remove("message").and_then(non_empty_string);
                    let data = map.remove("data").unwrap_or(Value::Null);
                    Self::Envelope { success, message, data }
                }
                _ if map.get("content").is_some_and(Value::is_array) => Self::BarePage(map),
                _ => Self::BareValue(Value::Object(map)),
            },
            other => Self::BareValue(other),
        }
    }

    /// Best-effort failure text carried by the body (`message`, then `error`)
    fn failure_message(&self) -> Option<String> {
        match self {
            Self::Envelope { message, .. } => message.clone(),
            Self::BareValue(Value::Object(map)) => map
                .get("message")
                .cloned()
                .and_then(non_empty_string)
                .or_else(|| map.get("error").cloned().and_then(non_empty_string)),
            Self::BarePage(map) => map.get("message").cloned().and_then(non_empty_string),
            _ => None,
        }
    }
}

/// Turn a raw response into the payload callers see, or a classified error.
///
/// # Arguments
/// * `body` - raw response text, possibly empty
/// * `status` - HTTP status code
/// * `status_text` - canonical reason phrase, used when the body has no message
///
/// # Errors
/// * [`ApiError::Http`] for any non-2xx status
/// * [`ApiError::Envelope`] for a 2xx `{ "success": false }` envelope
pub fn normalize_response(body: &str, status: u16, status_text: &str) -> Result<Value, ApiError> {
    let shape = ResponseShape::decode(body);

    if !(200..300).contains(&status) {
        let message = shape
            .failure_message()
            .or_else(|| non_empty(status_text))
            .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string());
        return Err(ApiError::Http { status, message });
    }

    match shape {
        ResponseShape::Empty => Ok(Value::Null),
        ResponseShape::Envelope { success: true, data, .. } => Ok(data),
        ResponseShape::Envelope { success: false, message, .. } => Err(ApiError::Envelope {
            status,
            message: message.unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string()),
        }),
        ResponseShape::BarePage(map) => Ok(Value::Object(map)),
        ResponseShape::BareArray(items) => Ok(Value::Array(items)),
        ResponseShape::BareValue(value) => Ok(value),
    }
}

/// Map a normalized payload onto `T`.
///
/// # Errors
/// [`ApiError::Decode`] when the payload does not fit `T`.
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::Decode {
        status: 200,
        message: format!("Unexpected response format: {err}"),
    })
}

fn non_empty_string(value: Value) -> Option<String> {
    match value {
        Value::String(text) => non_empty(&text),
        _ => None,
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
