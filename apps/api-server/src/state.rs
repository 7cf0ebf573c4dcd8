//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use board_core::ports::{CounterStore, UnitOfWork};
use board_core::{CommentService, LikeService, PostService};
use board_infra::{InMemoryBoardStore, InMemoryCounterStore};

#[cfg(feature = "postgres")]
use board_infra::PostgresStore;
#[cfg(feature = "redis")]
use board_infra::RedisCounterStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub comments: CommentService,
    pub likes: LikeService,
}

impl AppState {
    /// Build the application state with the adapters the configuration selects.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let store = build_store(config).await?;
        let counter = build_counter(config).await?;

        tracing::info!("Application state initialized");
        Ok(Self::from_parts(store, counter))
    }

    /// State backed entirely by process memory.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::from_parts(
            Arc::new(InMemoryBoardStore::new()),
            Arc::new(InMemoryCounterStore::new()),
        )
    }

    fn from_parts(store: Arc<dyn UnitOfWork>, counter: Arc<dyn CounterStore>) -> Self {
        let likes = LikeService::new(store.clone(), counter);
        Self {
            posts: PostService::new(store.clone(), likes.clone()),
            comments: CommentService::new(store),
            likes,
        }
    }
}

async fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn UnitOfWork>> {
    match &config.database {
        #[cfg(feature = "postgres")]
        Some(db_config) => {
            let store = PostgresStore::connect(db_config)
                .await
                .context("failed to connect to the board database")?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "postgres"))]
        Some(_) => {
            tracing::warn!("postgres feature disabled, ignoring DATABASE_URL");
            Ok(Arc::new(InMemoryBoardStore::new()))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            Ok(Arc::new(InMemoryBoardStore::new()))
        }
    }
}

#[cfg(feature = "redis")]
async fn build_counter(config: &AppConfig) -> anyhow::Result<Arc<dyn CounterStore>> {
    let Some(redis_config) = &config.redis else {
        tracing::info!("REDIS_URL not set. Using in-memory like counters.");
        return Ok(Arc::new(InMemoryCounterStore::new()));
    };

    match RedisCounterStore::new(redis_config).await {
        Ok(store) => Ok(Arc::new(store)),
        Err(e) if redis_config.fallback_to_memory => {
            tracing::warn!(error = %e, "Redis unavailable, using in-memory like counters");
            Ok(Arc::new(InMemoryCounterStore::new()))
        }
        Err(e) => Err(e).context("failed to connect to Redis"),
    }
}

#[cfg(not(feature = "redis"))]
async fn build_counter(_config: &AppConfig) -> anyhow::Result<Arc<dyn CounterStore>> {
    tracing::info!("Running without redis feature - using in-memory like counters");
    Ok(Arc::new(InMemoryCounterStore::new()))
}
