//! # Keyed Redirect
//!
//! A URL redirect service: clients register short alphanumeric keys that
//! point at target URLs, and `GET /{key}` redirects to the target. Mappings
//! live in Redis; the service keeps no in-process cache.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity and store trait
//! - **Application Layer** ([`application`]) - Validation and store orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - The not-found page
//!
//! ## HTTP Surface
//!
//! | Method | Path            | Auth    |
//! |--------|-----------------|---------|
//! | GET    | `/{key}`        | none    |
//! | GET    | `/api/read_all` | API key |
//! | POST   | `/api/add`      | API key |
//! | PUT    | `/api/update`   | API key |
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! export API_KEY="change-me"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, MappingService};
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::repositories::{MappingStore, StoreError, StoreResult};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{InMemoryMappingStore, RedisMappingStore};
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
    pub use crate::web::NotFoundPage;
}
