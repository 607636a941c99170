//! Handler for key redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a key to its stored URL.
///
/// # Endpoint
///
/// `GET /{key}` (public)
///
/// # Responses
///
/// - **302 Found** with `Location: <stored value>`
/// - **400 Bad Request** if the key is not alphanumeric (store not queried)
/// - **404 Not Found** with the not-found HTML page if the key is absent
/// - **500 Internal Server Error** on store errors
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Some(target) = state.mapping_service.resolve(&key).await? else {
        debug!(key = %key, "Key not found");
        return Ok(state.not_found_page.into_response());
    };

    // Values written through the API always fit in a header; anything else
    // was put in the store by another client.
    let location = HeaderValue::try_from(target.as_str()).map_err(|e| {
        AppError::internal(format!(
            "stored value for key {key} is not a valid Location header: {e}"
        ))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
