//! Application layer services implementing business logic.
//!
//! Services consume the store trait and expose a small API to HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Resolve, list, create, update
//! - [`services::auth_service::AuthService`] - API key authentication

pub mod services;
