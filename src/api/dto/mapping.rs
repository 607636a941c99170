//! DTO for the create and update endpoints.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::Deserialize;
use serde_json::Value;
use serde_with::{NoneAsEmptyString, serde_as};
use tracing::debug;

use crate::error::AppError;

const INVALID_BODY_MESSAGE: &str = "Invalid JSON body";

/// Request body for `POST /api/add` and `PUT /api/update`.
///
/// ```json
/// { "key": "abc123", "value": "https://example.com" }
/// ```
///
/// An absent field, `null`, and `""` all deserialize to `None`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct MappingRequest {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub key: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub value: Option<String>,
}

impl MappingRequest {
    /// Builds a request from the raw headers and body.
    ///
    /// These bodies read as a request with neither field, so they later fail
    /// with the missing-fields message:
    ///
    /// - a body sent without a JSON content type
    /// - an empty body
    /// - a top-level JSON array
    ///
    /// Malformed JSON, a top-level scalar, or a non-string field is a `400`.
    pub fn from_parts(headers: &HeaderMap, body: &[u8]) -> Result<Self, AppError> {
        if !has_json_content_type(headers) || body.is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body).map_err(invalid_body)?;
        match value {
            Value::Object(_) => serde_json::from_value(value).map_err(invalid_body),
            Value::Array(_) => Ok(Self::default()),
            _ => Err(AppError::bad_request(INVALID_BODY_MESSAGE)),
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl<S> FromRequest<S> for MappingRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            debug!(reason = %rejection.body_text(), "Failed to read request body");
            AppError::bad_request(INVALID_BODY_MESSAGE)
        })?;

        Self::from_parts(&headers, &body)
    }
}

fn invalid_body(e: serde_json::Error) -> AppError {
    debug!(reason = %e, "Rejected request body");
    AppError::bad_request(INVALID_BODY_MESSAGE)
}

/// `application/json` or any `application/*+json` type, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
