use std::sync::Arc;

use crate::DomainError;
use crate::domain::Like;
use crate::ports::{CounterStore, UnitOfWork, like_count_key};

/// Records likes and serves like counts from the counter store.
///
/// The counter key of a post is incremented once per committed like and is
/// the count callers see. A missing key means no likes. The database is only
/// consulted when the counter store cannot be read.
#[derive(Clone)]
pub struct LikeService {
    store: Arc<dyn UnitOfWork>,
    counter: Arc<dyn CounterStore>,
}

impl LikeService {
    pub fn new(store: Arc<dyn UnitOfWork>, counter: Arc<dyn CounterStore>) -> Self {
        Self { store, counter }
    }

    /// Like a post on behalf of `created_by`. Returns the like's id.
    pub async fn create_like(&self, post_id: i64, created_by: &str) -> Result<i64, DomainError> {
        let tx = self.store.begin().await?;
        if tx.posts().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::post_not_found(post_id));
        }
        let like = tx.likes().save(Like::new(post_id, created_by)).await?;
        tx.commit().await?;

        let key = like_count_key(post_id);
        match self.counter.increment(&key).await {
            Ok(count) => tracing::debug!(post_id, like_id = like.id, count, "Like recorded"),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Counter increment failed");
            }
        }
        Ok(like.id)
    }

    /// Number of likes a post has received.
    pub async fn count_likes(&self, post_id: i64) -> Result<i64, DomainError> {
        let key = like_count_key(post_id);
        match self.counter.get(&key).await {
            Ok(count) => Ok(count.unwrap_or(0)),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Counter read failed, using database");
                let tx = self.store.read_only().await?;
                let count = tx.likes().count_by_post_id(post_id).await?;
                tx.commit().await?;
                Ok(count)
            }
        }
    }

    /// Drop the counter of a deleted post.
    pub(crate) async fn forget(&self, post_id: i64) {
        let key = like_count_key(post_id);
        if let Err(e) = self.counter.delete(&key).await {
            tracing::warn!(key = %key, error = %e, "Failed to drop like counter");
        }
    }
}
