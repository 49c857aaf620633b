use serde_json::Value;
use thiserror::Error;

/// The only error kind that crosses the store boundary. Network,
/// validation, and not-found failures all collapse into a single
/// human-readable message produced here.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("{0}")]
    RequestFailed(String),
}

/// Fallback when the response body carries nothing usable.
const GENERIC_MESSAGE: &str = "Something went wrong";

impl ApiError {
    /// Build an error from a non-success response body.
    ///
    /// The backend reports failures as `{"detail": ...}` where `detail` is
    /// either a plain string or an array of validation objects with a `msg`
    /// field. Anything else falls back to a generic message.
    pub fn from_body(body: &str) -> Self {
        let message = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => match map.get("detail") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Array(items)) => {
                    let msgs: Vec<&str> = items
                        .iter()
                        .filter_map(|d| d.get("msg").and_then(Value::as_str))
                        .collect();
                    if msgs.is_empty() {
                        GENERIC_MESSAGE.to_string()
                    } else {
                        msgs.join(", ")
                    }
                }
                _ => GENERIC_MESSAGE.to_string(),
            },
            _ => GENERIC_MESSAGE.to_string(),
        };
        ApiError::RequestFailed(message)
    }

    /// The message as stored in a store's `error` field.
    pub fn message(&self) -> &str {
        match self {
            ApiError::RequestFailed(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::RequestFailed(err.to_string())
    }
}
