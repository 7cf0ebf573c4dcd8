//! In-memory counter store - used as fallback when Redis is unavailable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use board_core::ports::{CounterError, CounterStore};

/// In-memory counters using a HashMap behind an async RwLock.
///
/// Increments take the write lock, so each one is atomic.
/// Note: Counts are lost on process restart.
pub struct InMemoryCounterStore {
    counters: RwLock<HashMap<String, i64>>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self {
            counters: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn get(&self, key: &str) -> Result<Option<i64>, CounterError> {
        Ok(self.counters.read().await.get(key).copied())
    }

    async fn set(&self, key: &str, value: i64) -> Result<(), CounterError> {
        self.counters.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<i64, CounterError> {
        let mut counters = self.counters.write().await;
        let count = counters.entry(key.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn delete(&self, key: &str) -> Result<(), CounterError> {
        self.counters.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = InMemoryCounterStore::new();
        assert_eq!(store.get("like:1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_increment_starts_at_zero() {
        let store = InMemoryCounterStore::new();
        assert_eq!(store.increment("like:1").await.unwrap(), 1);
        assert_eq!(store.increment("like:1").await.unwrap(), 2);
        assert_eq!(store.get("like:1").await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_set_and_delete() {
        let store = InMemoryCounterStore::new();
        store.set("like:2", 7).await.unwrap();
        assert_eq!(store.get("like:2").await.unwrap(), Some(7));
        store.delete("like:2").await.unwrap();
        assert_eq!(store.get("like:2").await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let store = Arc::new(InMemoryCounterStore::new());
        let handles: Vec<_> = (0..50)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.increment("like:3").await.unwrap() })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.get("like:3").await.unwrap(), Some(50));
    }
}
