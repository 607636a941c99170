//! Page served for unknown redirect keys.

use std::path::Path;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{info, warn};

/// File name of the page inside the public directory.
pub const NOT_FOUND_FILE: &str = "key-not-found.html";

const BUILTIN_PAGE: &str = include_str!("../../public/key-not-found.html");

/// HTML body answered with `404` when a key has no mapping.
///
/// Loaded once at startup and served verbatim; cloning shares the body.
#[derive(Debug, Clone)]
pub struct NotFoundPage {
    body: Arc<str>,
}

impl NotFoundPage {
    /// Wraps an HTML body.
    pub fn new(body: impl Into<Arc<str>>) -> Self {
        Self { body: body.into() }
    }

    /// Reads [`NOT_FOUND_FILE`] from `public_dir`.
    ///
    /// Falls back to the built-in page when the file cannot be read, so a
    /// missing asset never prevents startup.
    pub fn load(public_dir: &Path) -> Self {
        let path = public_dir.join(NOT_FOUND_FILE);

        match std::fs::read_to_string(&path) {
            Ok(body) => {
                info!("Loaded not-found page from {}", path.display());
                Self::new(body)
            }
            Err(e) => {
                warn!(
                    "Failed to read {}: {}. Using built-in not-found page.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Default for NotFoundPage {
    fn default() -> Self {
        Self::new(BUILTIN_PAGE)
    }
}

impl IntoResponse for NotFoundPage {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Html(self.body.to_string())).into_response()
    }
}
