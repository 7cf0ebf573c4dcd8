use std::sync::Arc;

use crate::DomainError;
use crate::domain::{Comment, Owned};
use crate::ports::UnitOfWork;

/// Comment workflow. Every comment hangs off an existing post.
#[derive(Clone)]
pub struct CommentService {
    store: Arc<dyn UnitOfWork>,
}

impl CommentService {
    pub fn new(store: Arc<dyn UnitOfWork>) -> Self {
        Self { store }
    }

    pub async fn create_comment(
        &self,
        post_id: i64,
        content: &str,
        created_by: &str,
    ) -> Result<i64, DomainError> {
        let tx = self.store.begin().await?;
        if tx.posts().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::post_not_found(post_id));
        }
        let comment = tx
            .comments()
            .save(Comment::new(post_id, content, created_by))
            .await?;
        tx.commit().await?;

        tracing::info!(post_id, comment_id = comment.id, "Comment created");
        Ok(comment.id)
    }

    pub async fn update_comment(
        &self,
        id: i64,
        content: &str,
        updated_by: &str,
    ) -> Result<i64, DomainError> {
        let tx = self.store.begin().await?;
        let mut comment = tx
            .comments()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::comment_not_found(id))?;

        comment.update(content, updated_by)?;
        tx.comments().save(comment).await?;
        tx.commit().await?;

        tracing::info!(comment_id = id, "Comment updated");
        Ok(id)
    }

    pub async fn delete_comment(&self, id: i64, deleted_by: &str) -> Result<i64, DomainError> {
        let tx = self.store.begin().await?;
        let comment = tx
            .comments()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::comment_not_found(id))?;

        if !comment.is_owned_by(deleted_by) {
            return Err(DomainError::NotDeletable {
                entity: "comment",
                id,
            });
        }

        tx.comments().delete(id).await?;
        tx.commit().await?;

        tracing::info!(comment_id = id, post_id = comment.post_id, "Comment deleted");
        Ok(id)
    }
}
