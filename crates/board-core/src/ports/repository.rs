use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{Comment, Like, Page, PageRequest, Post, Tag};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity. Unsaved entities are inserted and come back with
    /// their assigned ID; persisted ones are updated in place.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` if nothing matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Conjunctive post search filter. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Substring of the title.
    pub title: Option<String>,
    /// Exact creator.
    pub created_by: Option<String>,
    /// Exact tag name the post must carry.
    pub tag: Option<String>,
}

impl PostFilter {
    pub fn matches(&self, post: &Post, tags: &[String]) -> bool {
        self.title
            .as_deref()
            .is_none_or(|title| post.title.contains(title))
            && self
                .created_by
                .as_deref()
                .is_none_or(|creator| post.created_by == creator)
            && self
                .tag
                .as_deref()
                .is_none_or(|tag| tags.iter().any(|t| t == tag))
    }
}

/// Post repository.
///
/// `delete` removes the post's comments, tags and likes along with it.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Newest posts first, restricted to `filter`.
    async fn find_page(
        &self,
        filter: &PostFilter,
        request: PageRequest,
    ) -> Result<Page<Post>, RepoError>;
}

#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i64> {
    /// Comments of a post in creation order.
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError>;
}

#[async_trait]
pub trait TagRepository: BaseRepository<Tag, i64> {
    /// Tags of a post in insertion order.
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Tag>, RepoError>;

    /// Replace every tag of a post with `names`, stored in the given order.
    async fn replace_all(
        &self,
        post_id: i64,
        names: &[String],
        created_by: &str,
    ) -> Result<Vec<Tag>, RepoError>;

    /// First tag name of each post that has any.
    async fn first_tags(&self, post_ids: &[i64]) -> Result<HashMap<i64, String>, RepoError>;
}

#[async_trait]
pub trait LikeRepository: BaseRepository<Like, i64> {
    async fn count_by_post_id(&self, post_id: i64) -> Result<i64, RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, created_by: &str) -> Post {
        Post::new(title, "content", created_by)
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(PostFilter::default().matches(&post("anything", "anyone"), &[]));
    }

    #[test]
    fn filters_are_conjunctive() {
        let filter = PostFilter {
            title: Some("title1".into()),
            created_by: Some("haeni".into()),
            tag: None,
        };
        assert!(filter.matches(&post("title1", "haeni"), &[]));
        assert!(filter.matches(&post("title10", "haeni"), &[]));
        assert!(!filter.matches(&post("title1", "kou"), &[]));
        assert!(!filter.matches(&post("title2", "haeni"), &[]));
    }

    #[test]
    fn tag_filter_is_exact_membership() {
        let filter = PostFilter {
            tag: Some("tag5".into()),
            ..Default::default()
        };
        assert!(filter.matches(&post("t", "c"), &tags(&["tag1", "tag5"])));
        assert!(!filter.matches(&post("t", "c"), &tags(&["tag55", "tag"])));
    }
}
