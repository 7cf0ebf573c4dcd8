//! Comment workflow against the in-memory store.

use std::sync::Arc;

use board_core::services::NewPost;
use board_core::{CommentService, DomainError, LikeService, PostService};
use board_infra::{InMemoryBoardStore, InMemoryCounterStore};

async fn setup() -> (PostService, CommentService, i64) {
    let store = Arc::new(InMemoryBoardStore::new());
    let likes = LikeService::new(store.clone(), Arc::new(InMemoryCounterStore::new()));
    let posts = PostService::new(store.clone(), likes);
    let comments = CommentService::new(store);

    let post_id = posts
        .create_post(NewPost {
            title: "title".into(),
            content: "content".into(),
            created_by: "haeni".into(),
            tags: vec![],
        })
        .await
        .unwrap();

    (posts, comments, post_id)
}

#[tokio::test]
async fn test_comment_on_missing_post_is_not_found() {
    let (_, comments, _) = setup().await;

    let err = comments
        .create_comment(99999, "comment", "haeni")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "post", id: 99999 }));
}

#[tokio::test]
async fn test_comments_are_listed_in_creation_order() {
    let (posts, comments, post_id) = setup().await;

    comments.create_comment(post_id, "first", "a").await.unwrap();
    comments.create_comment(post_id, "second", "b").await.unwrap();

    let detail = posts.get_post(post_id).await.unwrap();
    let contents: Vec<&str> = detail.comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second"]);
}

#[tokio::test]
async fn test_only_the_author_updates_a_comment() {
    let (posts, comments, post_id) = setup().await;
    let id = comments.create_comment(post_id, "original", "a").await.unwrap();

    let err = comments.update_comment(id, "hijacked", "b").await.unwrap_err();
    assert!(matches!(err, DomainError::NotUpdatable { entity: "comment", .. }));

    comments.update_comment(id, "edited", "a").await.unwrap();
    let detail = posts.get_post(post_id).await.unwrap();
    assert_eq!(detail.comments[0].content, "edited");
    assert_eq!(detail.comments[0].updated_by.as_deref(), Some("a"));
}

#[tokio::test]
async fn test_update_missing_comment_is_not_found() {
    let (_, comments, _) = setup().await;

    let err = comments.update_comment(5, "x", "a").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "comment", id: 5 }));
}

#[tokio::test]
async fn test_only_the_author_deletes_a_comment() {
    let (posts, comments, post_id) = setup().await;
    let id = comments.create_comment(post_id, "comment", "a").await.unwrap();

    let err = comments.delete_comment(id, "not-a").await.unwrap_err();
    assert!(matches!(err, DomainError::NotDeletable { entity: "comment", .. }));
    assert_eq!(posts.get_post(post_id).await.unwrap().comments.len(), 1);

    assert_eq!(comments.delete_comment(id, "a").await.unwrap(), id);
    assert!(posts.get_post(post_id).await.unwrap().comments.is_empty());

    let err = comments.delete_comment(id, "a").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "comment", .. }));
}
