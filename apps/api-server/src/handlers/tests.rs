use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use crate::handlers::configure_routes;
use crate::state::AppState;

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_create_then_get_post() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({"title": "제목", "content": "내용", "createdBy": "haeni"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    let id = body["data"].as_i64().unwrap();
    assert!(id > 0);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{id}"))
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(detail["title"], "제목");
    assert_eq!(detail["content"], "내용");
    assert_eq!(detail["createdBy"], "haeni");
    assert_eq!(detail["tags"], json!([]));
    assert_eq!(detail["likeCount"], 0);
    assert_eq!(detail["comments"], json!([]));
}

#[actix_web::test]
async fn test_comment_on_missing_post_is_not_found() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts/99999/comments")
        .set_json(json!({"content": "댓글", "createdBy": "haeni"}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], 404);
}

#[actix_web::test]
async fn test_foreign_update_and_delete_are_forbidden() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({"title": "title", "content": "content", "createdBy": "haeni"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["data"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{id}"))
        .set_json(json!({"title": "t", "content": "c", "updatedBy": "someone"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{id}?createdBy=not-haeni"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{id}?createdBy=haeni"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_blank_title_is_bad_request() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({"title": "  ", "content": "c", "createdBy": "haeni"}))
        .to_request();

    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_likes_and_comments_show_up_on_the_post() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({
            "title": "title",
            "content": "content",
            "createdBy": "haeni",
            "tags": ["tag1", "tag2"]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["data"].as_i64().unwrap();

    for user in ["a", "b"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{id}/likes"))
            .set_json(json!({"createdBy": user}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{id}/comments"))
        .set_json(json!({"content": "first", "createdBy": "a"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let comment_id = body["data"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/comments/{comment_id}"))
        .set_json(json!({"content": "edited", "updatedBy": "a"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{id}"))
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(detail["likeCount"], 2);
    assert_eq!(detail["tags"], json!(["tag1", "tag2"]));
    assert_eq!(detail["comments"][0]["content"], "edited");
    assert_eq!(detail["comments"][0]["updatedBy"], "a");
}

#[actix_web::test]
async fn test_list_posts_with_filters() {
    let app = app!();

    let seeds = [
        ("apple", "haeni", "fruit"),
        ("banana", "other", "fruit"),
        ("carrot", "haeni", "veg"),
    ];
    for (title, user, tag) in seeds {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": title, "content": "c", "createdBy": user, "tags": [tag]}))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/posts?createdBy=haeni&size=1")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["totalElements"], 2);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["content"][0]["title"], "carrot");
    assert_eq!(page["content"][0]["firstTag"], "veg");

    let req = test::TestRequest::get()
        .uri("/api/posts?tag=fruit&title=an")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["content"][0]["title"], "banana");
}

#[actix_web::test]
async fn test_health() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_list_posts_with_huge_page_index() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({"title": "title", "content": "c", "createdBy": "haeni"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/posts?page=9223372036854775807")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let page: Value = test::read_body_json(res).await;
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["content"], json!([]));
}
