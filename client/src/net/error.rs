//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Session failures are recovered inside `request::send_with_refresh`; what
//! reaches a page is either `LoginRequired` (navigation already triggered),
//! a network failure, or a backend message flattened into one display line.
//! Nothing here is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a single backend operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// Session refresh failed; the login redirect has been issued.
    #[error("session expired, please sign in again")]
    LoginRequired,
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request body could not be serialized.
    #[error("could not encode request: {0}")]
    Encode(String),
    /// The backend answered 2xx with a body we could not decode.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a `Server` error from a failure response body.
    pub fn from_body(status: u16, body: &str, fallback: &str) -> Self {
        Self::Server { status, message: error_message(body, fallback) }
    }
}

/// Extract a human-readable message from a backend failure body.
///
/// Validation failures (a list of `{loc, msg}` items, either top-level or
/// under `detail`) are flattened to `field: msg` pairs joined by `", "`.
/// A string `detail` or `message` is returned verbatim. Anything else yields
/// `fallback`.
pub fn error_message(body: &str, fallback: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback.to_owned();
    };

    if let Some(items) = value.as_array() {
        return flatten_validation_errors(items).unwrap_or_else(|| fallback.to_owned());
    }

    match value.get("detail") {
        Some(Value::Array(items)) => {
            if let Some(flat) = flatten_validation_errors(items) {
                return flat;
            }
        }
        Some(Value::String(detail)) if !detail.is_empty() => return detail.clone(),
        _ => {}
    }

    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map_or_else(|| fallback.to_owned(), str::to_owned)
}

fn flatten_validation_errors(items: &[Value]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let parts = items
        .iter()
        .map(|item| {
            let msg = item.get("msg").and_then(Value::as_str).unwrap_or("invalid value");
            format!("{}: {msg}", validation_field(item.get("loc")))
        })
        .collect::<Vec<_>>();
    Some(parts.join(", "))
}

/// `loc` is `["body", "field", ...]`; the second segment names the field.
fn validation_field(loc: Option<&Value>) -> String {
    let Some(Value::Array(segments)) = loc else {
        return "field".to_owned();
    };
    let segment = if segments.len() > 1 { segments.get(1) } else { segments.first() };
    match segment {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "field".to_owned(),
    }
}
