//! Management API route configuration.
//!
//! All routes here require API key authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{add_handler, read_all_handler, update_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Management routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /read_all` - Every mapping as a JSON object
/// - `POST /add`      - Create a mapping
/// - `PUT  /update`   - Overwrite an existing mapping
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/read_all", get(read_all_handler))
        .route("/add", post(add_handler))
        .route("/update", put(update_handler))
}
