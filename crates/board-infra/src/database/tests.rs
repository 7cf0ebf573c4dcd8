use std::collections::BTreeMap;

use board_core::domain::PageRequest;
use board_core::error::RepoError;
use board_core::ports::{PostFilter, UnitOfWork};
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait, MockDatabase, MockExecResult,
    QueryFilter, QueryTrait, Value,
};

use crate::database::entity::{post, tag};
use crate::database::postgres_repo::{PostgresStore, contains_pattern};

fn post_model(id: i64, title: &str, created_by: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        title: title.to_owned(),
        content: "content".to_owned(),
        created_by: created_by.to_owned(),
        updated_by: None,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn tag_model(id: i64, post_id: i64, name: &str) -> tag::Model {
    tag::Model {
        id,
        post_id,
        name: name.to_owned(),
        created_by: "haeni".to_owned(),
        created_at: Utc::now().into(),
    }
}

fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

fn store(db: DatabaseConnection) -> PostgresStore {
    PostgresStore::new(db)
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model(1, "Test Post", "haeni")]])
        .into_connection();

    let tx = store(db).begin().await.unwrap();
    let post = tx.posts().find_by_id(1).await.unwrap().unwrap();

    assert_eq!(post.id, 1);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.created_by, "haeni");
    assert!(post.updated_by.is_none());
}

#[tokio::test]
async fn test_delete_post_removes_children_first() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // comments, tags, likes, then the post itself
        .append_exec_results([exec(2), exec(3), exec(0), exec(1)])
        .into_connection();

    let tx = store(db).begin().await.unwrap();
    tx.posts().delete(1).await.unwrap();
    tx.commit().await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec(0), exec(0), exec(0), exec(0)])
        .into_connection();

    let tx = store(db).begin().await.unwrap();
    let err = tx.posts().delete(42).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_replace_all_keeps_requested_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec(3)])
        .append_query_results([
            vec![tag_model(10, 1, "tag3")],
            vec![tag_model(11, 1, "tag2")],
            vec![tag_model(12, 1, "tag1")],
        ])
        .into_connection();

    let requested: Vec<String> = ["tag3", "tag2", "tag1"].map(String::from).to_vec();
    let tx = store(db).begin().await.unwrap();
    let saved = tx.tags().replace_all(1, &requested, "haeni").await.unwrap();

    let names: Vec<&str> = saved.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["tag3", "tag2", "tag1"]);
    assert_eq!(saved.iter().map(|t| t.id).collect::<Vec<_>>(), vec![10, 11, 12]);
}

#[tokio::test]
async fn test_first_tags_picks_lowest_id_per_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            tag_model(1, 7, "tag1"),
            tag_model(2, 7, "tag2"),
            tag_model(3, 8, "tag5"),
        ]])
        .into_connection();

    let tx = store(db).begin().await.unwrap();
    let first = tx.tags().first_tags(&[7, 8, 9]).await.unwrap();

    assert_eq!(first.get(&7).map(String::as_str), Some("tag1"));
    assert_eq!(first.get(&8).map(String::as_str), Some("tag5"));
    assert!(!first.contains_key(&9));
}

#[tokio::test]
async fn test_find_page_reports_totals() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![BTreeMap::from([(
            "num_items",
            Into::<Value>::into(12i64),
        )])]])
        .append_query_results([vec![
            post_model(13, "title13", "haeni97"),
            post_model(12, "title12", "haeni97"),
        ]])
        .into_connection();

    let filter = PostFilter {
        created_by: Some("haeni97".into()),
        ..Default::default()
    };
    let tx = store(db).begin().await.unwrap();
    let page = tx
        .posts()
        .find_page(&filter, PageRequest::new(0, 2))
        .await
        .unwrap();

    assert_eq!(page.total_elements, 12);
    assert_eq!(page.total_pages, 6);
    assert_eq!(page.content[0].title, "title13");
    assert_eq!(page.content.len(), 2);
}

#[test]
fn test_title_filter_escapes_like_wildcards() {
    let sql = post::Entity::find()
        .filter(post::Column::Title.like(contains_pattern("50%_off")))
        .build(DatabaseBackend::Postgres)
        .to_string();

    assert!(sql.contains("ESCAPE"), "{sql}");
    assert!(!sql.contains("'%50%_off%'"), "{sql}");
}
