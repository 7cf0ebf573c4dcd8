use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::LikeService;
use crate::DomainError;
use crate::domain::{Comment, Owned, Page, PageRequest, Post, TagDiff};
use crate::ports::{PostFilter, UnitOfWork};

/// Input for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_by: String,
    /// Stored in this order.
    pub tags: Vec<String>,
}

/// Input for updating a post.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    pub updated_by: String,
    /// `None` keeps the stored tags, `Some(vec![])` clears them.
    pub tags: Option<Vec<String>>,
}

/// A post with everything attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub like_count: i64,
    pub comments: Vec<Comment>,
}

/// List entry for a post.
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub first_tag: Option<String>,
    pub like_count: i64,
}

/// Post workflow.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn UnitOfWork>,
    likes: LikeService,
}

impl PostService {
    pub fn new(store: Arc<dyn UnitOfWork>, likes: LikeService) -> Self {
        Self { store, likes }
    }

    pub async fn create_post(&self, new_post: NewPost) -> Result<i64, DomainError> {
        let NewPost {
            title,
            content,
            created_by,
            tags,
        } = new_post;

        let tx = self.store.begin().await?;
        let post = tx.posts().save(Post::new(title, content, created_by)).await?;
        if !tags.is_empty() {
            tx.tags().replace_all(post.id, &tags, &post.created_by).await?;
        }
        tx.commit().await?;

        tracing::info!(post_id = post.id, created_by = %post.created_by, "Post created");
        Ok(post.id)
    }

    pub async fn update_post(&self, id: i64, update: PostUpdate) -> Result<i64, DomainError> {
        let PostUpdate {
            title,
            content,
            updated_by,
            tags,
        } = update;

        let tx = self.store.begin().await?;
        let mut post = tx
            .posts()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        post.update(title, content, &updated_by)?;
        tx.posts().save(post).await?;

        if let Some(requested) = tags {
            let current: Vec<String> = tx
                .tags()
                .find_by_post_id(id)
                .await?
                .into_iter()
                .map(|tag| tag.name)
                .collect();

            let diff = TagDiff::between(&current, &requested);
            if !diff.is_empty() {
                tracing::debug!(
                    post_id = id,
                    added = ?diff.added,
                    removed = ?diff.removed,
                    order_changed = diff.order_changed,
                    "Replacing post tags"
                );
                tx.tags().replace_all(id, &requested, &updated_by).await?;
            }
        }
        tx.commit().await?;

        tracing::info!(post_id = id, "Post updated");
        Ok(id)
    }

    /// Delete a post with its comments, tags and likes.
    ///
    /// A missing post and a foreign post are both `NotDeletable`.
    pub async fn delete_post(&self, id: i64, deleted_by: &str) -> Result<i64, DomainError> {
        let tx = self.store.begin().await?;
        let owned = tx
            .posts()
            .find_by_id(id)
            .await?
            .is_some_and(|post| post.is_owned_by(deleted_by));
        if !owned {
            return Err(DomainError::NotDeletable { entity: "post", id });
        }

        tx.posts().delete(id).await?;
        tx.commit().await?;

        self.likes.forget(id).await;
        tracing::info!(post_id = id, "Post deleted");
        Ok(id)
    }

    pub async fn get_post(&self, id: i64) -> Result<PostDetail, DomainError> {
        let tx = self.store.read_only().await?;
        let post = tx
            .posts()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;
        let tags = tx
            .tags()
            .find_by_post_id(id)
            .await?
            .into_iter()
            .map(|tag| tag.name)
            .collect();
        let comments = tx.comments().find_by_post_id(id).await?;
        tx.commit().await?;

        let like_count = self.likes.count_likes(id).await?;

        Ok(PostDetail {
            id: post.id,
            title: post.title,
            content: post.content,
            created_by: post.created_by,
            updated_by: post.updated_by,
            created_at: post.created_at,
            tags,
            like_count,
            comments,
        })
    }

    pub async fn find_page(
        &self,
        request: PageRequest,
        filter: &PostFilter,
    ) -> Result<Page<PostSummary>, DomainError> {
        let tx = self.store.read_only().await?;
        let page = tx.posts().find_page(filter, request).await?;
        let ids: Vec<i64> = page.content.iter().map(|post| post.id).collect();
        let mut first_tags = tx.tags().first_tags(&ids).await?;
        tx.commit().await?;

        let mut like_counts = Vec::with_capacity(ids.len());
        for id in &ids {
            like_counts.push(self.likes.count_likes(*id).await?);
        }
        let mut like_counts = like_counts.into_iter();

        Ok(page.map(|post| PostSummary {
            first_tag: first_tags.remove(&post.id),
            like_count: like_counts.next().unwrap_or_default(),
            id: post.id,
            title: post.title,
            created_by: post.created_by,
            created_at: post.created_at,
        }))
    }
}
