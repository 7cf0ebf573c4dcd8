use async_trait::async_trait;

/// Counter store - atomic integer counters keyed by string (Redis, in-memory).
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Current value, or `None` when the key was never written.
    async fn get(&self, key: &str) -> Result<Option<i64>, CounterError>;

    /// Overwrite the value of a key.
    async fn set(&self, key: &str, value: i64) -> Result<(), CounterError>;

    /// Atomically add one and return the new value. Missing keys start at 0.
    async fn increment(&self, key: &str) -> Result<i64, CounterError>;

    /// Drop a key.
    async fn delete(&self, key: &str) -> Result<(), CounterError>;
}

/// Counter key holding the like count of a post.
pub fn like_count_key(post_id: i64) -> String {
    format!("like:{post_id}")
}

/// Counter store errors.
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Stored value is not a counter: {0}")]
    InvalidValue(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
