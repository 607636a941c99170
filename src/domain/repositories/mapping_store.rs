//! Store trait for key → URL mappings and its error type.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a [`MappingStore`] backend.
///
/// These are always infrastructure failures. Handlers log the detail and answer
/// with an opaque `500`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store command failed: {0}")]
    Command(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Flat key-value persistence for mappings.
///
/// Mirrors the small command set of the backing store (`GET`, `SET`, `EXISTS`,
/// `KEYS`, `MGET`, `PING`). Each call is a single round-trip; there is no
/// retry and no cross-call transaction.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisMappingStore`] - Redis backend
/// - [`crate::infrastructure::store::InMemoryMappingStore`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` when absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Returns true if `key` is present.
    async fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Returns every key currently in the store, in no particular order.
    async fn keys(&self) -> StoreResult<Vec<String>>;

    /// Fetches the values for `keys` in one batch.
    ///
    /// The result has the same length and order as `keys`; a key removed since
    /// it was listed yields `None`.
    async fn get_many(&self, keys: &[String]) -> StoreResult<Vec<Option<String>>>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
