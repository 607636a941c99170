//! Business logic services for the application layer.

pub mod auth_service;
pub mod mapping_service;

pub use auth_service::AuthService;
pub use mapping_service::MappingService;
