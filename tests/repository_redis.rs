//! Tests for `RedisMappingStore` against a live server.
//!
//! Tests that need Redis return early unless `REDIS_URL` is set, e.g.
//! `REDIS_URL=redis://127.0.0.1:6379/15 cargo test --test repository_redis`.
//! Keys carry a random suffix and are deleted afterwards, so a shared database
//! is fine.

use keyed_redirect::prelude::*;
use rand::Rng;
use redis::AsyncCommands;

fn redis_url() -> Option<String> {
    std::env::var("REDIS_URL").ok().filter(|url| !url.is_empty())
}

fn unique_key(prefix: &str) -> String {
    format!("{}{}", prefix, rand::rng().random_range(100_000_000u64..1_000_000_000))
}

async fn cleanup(url: &str, keys: &[&str]) {
    let client = redis::Client::open(url).unwrap();
    let mut conn = client.get_multiplexed_async_connection().await.unwrap();
    let _: () = conn.del(keys).await.unwrap();
}

#[tokio::test]
async fn test_set_then_get() {
    let Some(url) = redis_url() else { return };
    let store = RedisMappingStore::connect(&url).await.unwrap();
    let key = unique_key("setget");

    store.set(&key, "https://example.com").await.unwrap();
    assert_eq!(
        store.get(&key).await.unwrap(),
        Some("https://example.com".to_string())
    );

    store.set(&key, "https://example.org").await.unwrap();
    assert_eq!(
        store.get(&key).await.unwrap(),
        Some("https://example.org".to_string())
    );

    cleanup(&url, &[&key]).await;
}

#[tokio::test]
async fn test_get_absent_key() {
    let Some(url) = redis_url() else { return };
    let store = RedisMappingStore::connect(&url).await.unwrap();

    assert_eq!(store.get(&unique_key("absent")).await.unwrap(), None);
}

#[tokio::test]
async fn test_exists() {
    let Some(url) = redis_url() else { return };
    let store = RedisMappingStore::connect(&url).await.unwrap();
    let key = unique_key("exists");

    assert!(!store.exists(&key).await.unwrap());
    store.set(&key, "https://example.com").await.unwrap();
    assert!(store.exists(&key).await.unwrap());

    cleanup(&url, &[&key]).await;
}

#[tokio::test]
async fn test_keys_lists_written_keys() {
    let Some(url) = redis_url() else { return };
    let store = RedisMappingStore::connect(&url).await.unwrap();
    let first = unique_key("keysa");
    let second = unique_key("keysb");

    store.set(&first, "https://a.com").await.unwrap();
    store.set(&second, "https://b.com").await.unwrap();

    let keys = store.keys().await.unwrap();
    assert!(keys.contains(&first));
    assert!(keys.contains(&second));

    cleanup(&url, &[&first, &second]).await;
}

#[tokio::test]
async fn test_get_many_keeps_order_and_marks_missing() {
    let Some(url) = redis_url() else { return };
    let store = RedisMappingStore::connect(&url).await.unwrap();
    let first = unique_key("manya");
    let missing = unique_key("manygone");
    let second = unique_key("manyb");

    store.set(&first, "https://a.com").await.unwrap();
    store.set(&second, "https://b.com").await.unwrap();

    let values = store
        .get_many(&[first.clone(), missing, second.clone()])
        .await
        .unwrap();

    assert_eq!(
        values,
        vec![
            Some("https://a.com".to_string()),
            None,
            Some("https://b.com".to_string()),
        ]
    );

    cleanup(&url, &[&first, &second]).await;
}

#[tokio::test]
async fn test_get_many_single_key() {
    let Some(url) = redis_url() else { return };
    let store = RedisMappingStore::connect(&url).await.unwrap();
    let key = unique_key("single");

    store.set(&key, "https://a.com").await.unwrap();

    let values = store.get_many(std::slice::from_ref(&key)).await.unwrap();
    assert_eq!(values, vec![Some("https://a.com".to_string())]);

    cleanup(&url, &[&key]).await;
}

#[tokio::test]
async fn test_get_many_empty() {
    let Some(url) = redis_url() else { return };
    let store = RedisMappingStore::connect(&url).await.unwrap();

    assert!(store.get_many(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_all_over_redis() {
    let Some(url) = redis_url() else { return };
    let store = RedisMappingStore::connect(&url).await.unwrap();
    let key = unique_key("listall");

    store.set(&key, "https://example.com").await.unwrap();

    let service = MappingService::new(std::sync::Arc::new(store));
    let all = service.list_all().await.unwrap();
    assert_eq!(all.get(&key).map(String::as_str), Some("https://example.com"));
    assert!(service.health_check().await);

    cleanup(&url, &[&key]).await;
}

// ─── Connection failures (no server needed) ──────────────────────────────────

#[tokio::test]
async fn test_connect_rejects_invalid_url() {
    let result = RedisMappingStore::connect("http://localhost:6379").await;

    assert!(matches!(result, Err(StoreError::Connection(_))));
}

#[tokio::test]
async fn test_connect_unreachable_server() {
    let result = RedisMappingStore::connect("redis://127.0.0.1:1/0").await;

    assert!(matches!(result, Err(StoreError::Connection(_))));
}
