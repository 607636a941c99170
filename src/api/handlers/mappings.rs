//! Handlers for the management endpoints (read all, add, update).

use std::collections::BTreeMap;

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::mapping::MappingRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Returns every stored mapping.
///
/// # Endpoint
///
/// `GET /api/read_all`
///
/// # Response
///
/// ```json
/// {
///   "abc123": "https://example.com",
///   "docs": "https://docs.example.com"
/// }
/// ```
///
/// An empty store yields `{}`. The full dataset is returned in one response.
pub async fn read_all_handler(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, String>>, AppError> {
    let all = state.mapping_service.list_all().await?;
    Ok(Json(all))
}

/// Creates a new mapping.
///
/// # Endpoint
///
/// `POST /api/add`
///
/// # Errors
///
/// Returns 400 Bad Request for missing fields, a non-alphanumeric key, a value
/// without a URL shape, or a key that already exists.
pub async fn add_handler(
    State(state): State<AppState>,
    request: MappingRequest,
) -> Result<(StatusCode, &'static str), AppError> {
    state
        .mapping_service
        .create(request.key(), request.value())
        .await?;

    Ok((StatusCode::CREATED, "Key-Value pair added"))
}

/// Overwrites the value of an existing mapping.
///
/// # Endpoint
///
/// `PUT /api/update`
///
/// # Errors
///
/// Returns 400 Bad Request on the same validation failures as [`add_handler`],
/// and 404 Not Found if the key does not exist.
pub async fn update_handler(
    State(state): State<AppState>,
    request: MappingRequest,
) -> Result<(StatusCode, &'static str), AppError> {
    state
        .mapping_service
        .update(request.key(), request.value())
        .await?;

    Ok((StatusCode::OK, "Key-Value pair updated"))
}
