//! Redis counter store built on `INCR`.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, ErrorKind, RedisError};

use board_core::ports::{CounterError, CounterStore};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Whether to fall back to in-memory counters if Redis is unavailable
    pub fallback_to_memory: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
            fallback_to_memory: true,
        }
    }
}

impl RedisConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            connect_timeout: std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
            fallback_to_memory: std::env::var("REDIS_FALLBACK_TO_MEMORY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.fallback_to_memory),
        }
    }
}

/// Redis-backed counter store.
///
/// Uses connection manager for automatic reconnection. `INCR` is atomic on
/// the server, so concurrent likes never lose an increment.
pub struct RedisCounterStore {
    conn: ConnectionManager,
}

impl RedisCounterStore {
    pub async fn new(config: &RedisConfig) -> Result<Self, CounterError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| CounterError::Connection(e.to_string()))?;

        // Bounded so an unreachable server cannot hang startup
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| CounterError::Connection("Connection timed out".to_string()))?
            .map_err(|e| CounterError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, "Connected to Redis counter store");

        Ok(Self { conn })
    }
}

fn operation_error(e: RedisError) -> CounterError {
    if e.kind() == ErrorKind::TypeError {
        CounterError::InvalidValue(e.to_string())
    } else {
        CounterError::Operation(e.to_string())
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn get(&self, key: &str) -> Result<Option<i64>, CounterError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<i64>>(key).await.map_err(operation_error)
    }

    async fn set(&self, key: &str, value: i64) -> Result<(), CounterError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(operation_error)
    }

    async fn increment(&self, key: &str) -> Result<i64, CounterError> {
        let mut conn = self.conn.clone();
        conn.incr::<_, _, i64>(key, 1).await.map_err(operation_error)
    }

    async fn delete(&self, key: &str) -> Result<(), CounterError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(operation_error)
    }
}
