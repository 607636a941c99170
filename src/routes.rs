//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/read_all`, `/api/add`, `/api/update` - Management API (API key required)
//! - any file under the public directory     - Static assets (public)
//! - `GET /{key}`                            - Redirect (public)
//!
//! Static files are tried before the redirect route, so a file named like a
//! key shadows that key.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - API key on the management routes only
//! - **Path normalization** - Trailing slash trimming, see [`normalize`]

use std::path::Path;

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory served as static files; requests that match no
///   file there fall through to the redirect route
pub fn app_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let redirect_router = Router::new()
        .route("/{key}", get(redirect_handler))
        .with_state(state.clone());

    let static_files = ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(redirect_router);

    Router::new()
        .nest("/api", api_router)
        .fallback_service(static_files)
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps the router so `/abc123/` is routed as `/abc123`.
pub fn normalize(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
