#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use keyed_redirect::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

pub const API_KEY: &str = "test-api-key";

pub fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub fn create_test_state(store: Arc<dyn MappingStore>) -> AppState {
    AppState::new(store, API_KEY, NotFoundPage::load(&public_dir()))
}

/// Full application router over `store`, without trailing-slash normalization.
pub fn make_server(store: Arc<dyn MappingStore>) -> TestServer {
    let app = app_router(create_test_state(store), public_dir());
    TestServer::new(app).unwrap()
}

pub fn seeded_store(entries: &[(&str, &str)]) -> Arc<InMemoryMappingStore> {
    Arc::new(InMemoryMappingStore::with_entries(entries.iter().copied()))
}

/// Store whose every command fails, as if Redis were unreachable.
///
/// A request that answers anything but `500` over this store never touched it.
pub struct FailingStore;

fn refused() -> StoreError {
    StoreError::Command("connection refused".to_string())
}

#[async_trait]
impl MappingStore for FailingStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(refused())
    }

    async fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(refused())
    }

    async fn exists(&self, _key: &str) -> StoreResult<bool> {
        Err(refused())
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        Err(refused())
    }

    async fn get_many(&self, _keys: &[String]) -> StoreResult<Vec<Option<String>>> {
        Err(refused())
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(refused())
    }
}
