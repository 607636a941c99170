//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, MappingService};
use crate::domain::repositories::MappingStore;
use crate::web::NotFoundPage;

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
    pub auth_service: Arc<AuthService>,
    pub not_found_page: NotFoundPage,
}

impl AppState {
    /// Builds the state from a store backend and the management API key.
    pub fn new(
        store: Arc<dyn MappingStore>,
        api_key: impl Into<String>,
        not_found_page: NotFoundPage,
    ) -> Self {
        Self {
            mapping_service: Arc::new(MappingService::new(store)),
            auth_service: Arc::new(AuthService::new(api_key)),
            not_found_page,
        }
    }
}
