//! Mapping resolution and management service.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::validation::{validate_key_syntax, validate_url_syntax};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing key or value";
pub const INVALID_KEY_MESSAGE: &str = "Key must be alphanumeric";
pub const INVALID_URL_MESSAGE: &str = "Invalid URL format";
pub const KEY_EXISTS_MESSAGE: &str = "Key already exists";
pub const KEY_MISSING_MESSAGE: &str = "Key does not exist";

/// Service composing input validation with store calls.
///
/// Create and update share the same validation sequence and differ only in
/// the existence precondition checked before the single `SET`. The check and
/// the write are separate store calls, so two concurrent creates of the same
/// key can both succeed; the last write wins.
pub struct MappingService {
    store: Arc<dyn MappingStore>,
}

impl MappingService {
    /// Creates a new mapping service.
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Looks up the redirect target for `key`.
    ///
    /// Returns `Ok(None)` when the key is well-formed but absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the key is not alphanumeric (no store
    /// call is made) and [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, key: &str) -> Result<Option<String>, AppError> {
        if !validate_key_syntax(key) {
            return Err(AppError::bad_request(INVALID_KEY_MESSAGE));
        }

        let value = self.store.get(key).await?;
        debug!(key, found = value.is_some(), "Resolved key");
        Ok(value)
    }

    /// Returns every mapping currently in the store.
    ///
    /// Lists all keys, then fetches their values in one batch. Keys removed
    /// between the two calls are left out. The whole dataset is returned at
    /// once; there is no pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        let keys = self.store.keys().await?;
        if keys.is_empty() {
            return Ok(BTreeMap::new());
        }

        let values = self.store.get_many(&keys).await?;

        Ok(keys
            .into_iter()
            .zip(values)
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect())
    }

    /// Creates a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - key or value is missing or empty
    /// - key is not alphanumeric
    /// - value does not have a URL shape
    /// - the key already exists
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn create(
        &self,
        key: Option<&str>,
        value: Option<&str>,
    ) -> Result<Mapping, AppError> {
        let mapping = validate_input(key, value)?;

        if self.store.exists(&mapping.key).await? {
            return Err(AppError::bad_request(KEY_EXISTS_MESSAGE));
        }

        self.store.set(&mapping.key, &mapping.value).await?;
        info!(key = %mapping.key, "Mapping created");

        Ok(mapping)
    }

    /// Replaces the value of an existing mapping.
    ///
    /// # Errors
    ///
    /// Same validation errors as [`Self::create`], except that an existing key
    /// is required: returns [`AppError::NotFound`] if the key is absent.
    pub async fn update(
        &self,
        key: Option<&str>,
        value: Option<&str>,
    ) -> Result<Mapping, AppError> {
        let mapping = validate_input(key, value)?;

        if !self.store.exists(&mapping.key).await? {
            return Err(AppError::not_found(KEY_MISSING_MESSAGE));
        }

        self.store.set(&mapping.key, &mapping.value).await?;
        info!(key = %mapping.key, "Mapping updated");

        Ok(mapping)
    }

    /// Returns whether the store answers a PING.
    pub async fn health_check(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}

/// Runs the shared create/update checks in order: presence, key, URL.
fn validate_input(key: Option<&str>, value: Option<&str>) -> Result<Mapping, AppError> {
    let (Some(key), Some(value)) = (
        key.filter(|k| !k.is_empty()),
        value.filter(|v| !v.is_empty()),
    ) else {
        return Err(AppError::bad_request(MISSING_FIELDS_MESSAGE));
    };

    if !validate_key_syntax(key) {
        return Err(AppError::bad_request(INVALID_KEY_MESSAGE));
    }

    if !validate_url_syntax(value) {
        return Err(AppError::bad_request(INVALID_URL_MESSAGE));
    }

    Ok(Mapping::new(key, value))
}
