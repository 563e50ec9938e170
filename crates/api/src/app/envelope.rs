//! Uniform response envelope.
//!
//! Every handler answers with the same JSON shape:
//!
//! ```json
//! { "code": 200, "success": true, "message": "", "result": { "shows": [] } }
//! ```
//!
//! `code` doubles as the HTTP status, `success` is true iff the code is 2xx,
//! and `result` is either `null` or a JSON object whose keys name the payload.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Wire shape of every response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: u16,
    pub success: bool,
    pub message: String,
    pub result: Option<Map<String, Value>>,
}

/// Misuse of the envelope builder. These are programmer errors, not request errors.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("envelope result must be a JSON object, got {found}")]
    ResultNotMapping { found: &'static str },

    #[error("failed to serialize envelope result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Builder for an enveloped response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    message: String,
    result: Option<Map<String, Value>>,
}

impl ApiResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            message: String::new(),
            result: None,
        }
    }

    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    /// Build from optional parts: status defaults to 200, message to "".
    ///
    /// Fails if `result` is present but not a JSON object.
    pub fn from_parts(
        result: Option<Value>,
        status: Option<StatusCode>,
        message: Option<&str>,
    ) -> Result<Self, EnvelopeError> {
        let mut response = Self::new(status.unwrap_or(StatusCode::OK));
        if let Some(message) = message {
            response.message = message.to_string();
        }
        if let Some(result) = result {
            response.result = Some(into_mapping(result)?);
        }
        Ok(response)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Use `payload` itself as the result. It must serialize to a JSON object.
    pub fn with_result<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self, EnvelopeError> {
        self.result = Some(into_mapping(serde_json::to_value(payload)?)?);
        Ok(self)
    }

    /// Wrap `payload` under a single key naming its type (e.g. `"shows"`).
    pub fn with_keyed<T: Serialize + ?Sized>(
        mut self,
        key: &str,
        payload: &T,
    ) -> Result<Self, EnvelopeError> {
        let mut map = Map::new();
        map.insert(key.to_string(), serde_json::to_value(payload)?);
        self.result = Some(map);
        Ok(self)
    }

    pub fn into_envelope(self) -> Envelope {
        Envelope {
            code: self.status.as_u16(),
            success: self.status.is_success(),
            message: self.message,
            result: self.result,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self.into_envelope())).into_response()
    }
}

fn into_mapping(value: Value) -> Result<Map<String, Value>, EnvelopeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(EnvelopeError::ResultNotMapping {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
