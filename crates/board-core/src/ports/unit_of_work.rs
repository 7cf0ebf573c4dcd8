//! Transaction scope port.

use async_trait::async_trait;

use super::{CommentRepository, LikeRepository, PostRepository, TagRepository};
use crate::error::RepoError;

/// Hands out transaction scopes over the board's persistence layer.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Open a read-write transaction.
    async fn begin(&self) -> Result<Box<dyn Transaction>, RepoError>;

    /// Open a read-only scope. It never blocks writers.
    async fn read_only(&self) -> Result<Box<dyn Transaction>, RepoError>;
}

/// An open transaction.
///
/// Writes become visible to others only after `commit`. Dropping a
/// transaction without committing rolls every write back.
#[async_trait]
pub trait Transaction: Send + Sync {
    fn posts(&self) -> &dyn PostRepository;

    fn comments(&self) -> &dyn CommentRepository;

    fn tags(&self) -> &dyn TagRepository;

    fn likes(&self) -> &dyn LikeRepository;

    async fn commit(self: Box<Self>) -> Result<(), RepoError>;
}
