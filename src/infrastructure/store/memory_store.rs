//! Process-local mapping store.

use crate::domain::repositories::{MappingStore, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A [`MappingStore`] kept in a `HashMap`.
///
/// Used by the integration tests and by embedders that want the HTTP surface
/// without a Redis server. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct InMemoryMappingStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryMappingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl MappingStore for InMemoryMappingStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.entries.read().await.contains_key(key))
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }

    async fn get_many(&self, keys: &[String]) -> StoreResult<Vec<Option<String>>> {
        let entries = self.entries.read().await;
        Ok(keys.iter().map(|k| entries.get(k).cloned()).collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_overwrites_existing_value() {
        let store = InMemoryMappingStore::with_entries([("abc", "https://old.com")]);

        store.set("abc", "https://new.com").await.unwrap();

        assert_eq!(
            store.get("abc").await.unwrap(),
            Some("https://new.com".to_string())
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_keys_are_case_sensitive() {
        let store = InMemoryMappingStore::with_entries([("Abc", "https://example.com")]);

        assert!(store.exists("Abc").await.unwrap());
        assert!(!store.exists("abc").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_many_preserves_order_and_gaps() {
        let store = InMemoryMappingStore::with_entries([
            ("one", "https://one.com"),
            ("two", "https://two.com"),
        ]);

        let keys = vec!["two".to_string(), "gone".to_string(), "one".to_string()];
        let values = store.get_many(&keys).await.unwrap();

        assert_eq!(
            values,
            vec![
                Some("https://two.com".to_string()),
                None,
                Some("https://one.com".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = InMemoryMappingStore::new();

        assert!(store.is_empty().await);
        assert!(store.keys().await.unwrap().is_empty());
        assert_eq!(store.get("missing").await.unwrap(), None);
    }
}
