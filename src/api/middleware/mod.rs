//! HTTP middleware: API key authentication and request tracing.

pub mod auth;
pub mod tracing;
