//! API key authentication middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Authenticates requests using the raw `Authorization` header value.
///
/// # Header Format
///
/// ```text
/// Authorization: <api key>
/// ```
///
/// The header value must equal the configured key exactly; no scheme prefix
/// is stripped.
///
/// # Errors
///
/// Returns `401 Unauthorized` with a plain-text body if the header is missing
/// or does not match. The wrapped handler does not run.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/read_all", get(read_all_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .map(HeaderValue::as_bytes);

    st.auth_service.authenticate(presented)?;

    Ok(next.run(req).await)
}
