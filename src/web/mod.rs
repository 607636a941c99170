//! Browser-facing pages.
//!
//! Static assets are served straight from the public directory by
//! [`crate::routes`]; this module only owns the not-found page answered by the
//! redirect handler.

pub mod not_found;

pub use not_found::NotFoundPage;
