//! Redis-backed mapping store.

use crate::domain::repositories::{MappingStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, info};

/// Mapping store on top of a Redis connection.
///
/// Keys are written as-is (no namespace prefix) and values as plain strings.
/// `ConnectionManager` reconnects transparently; a command that fails while the
/// connection is down surfaces as [`StoreError::Command`].
#[derive(Clone)]
pub struct RedisMappingStore {
    conn: ConnectionManager,
}

impl RedisMappingStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis at {}", crate::config::mask_connection_string(redis_url));

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self { conn: manager };
        store
            .ping()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(store)
    }
}

fn command_error(e: RedisError) -> StoreError {
    StoreError::Command(e.to_string())
}

#[async_trait]
impl MappingStore for RedisMappingStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value = conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(command_error)?;

        debug!(key, hit = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(command_error)?;

        debug!(key, "Redis SET");
        Ok(())
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        conn.exists::<_, bool>(key).await.map_err(command_error)
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        let mut conn = self.conn.clone();
        conn.keys::<_, Vec<String>>("*")
            .await
            .map_err(command_error)
    }

    async fn get_many(&self, keys: &[String]) -> StoreResult<Vec<Option<String>>> {
        // MGET with no arguments is a protocol error
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn.clone();
        conn.mget::<_, Vec<Option<String>>>(keys)
            .await
            .map_err(command_error)
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.map_err(command_error)
    }
}
