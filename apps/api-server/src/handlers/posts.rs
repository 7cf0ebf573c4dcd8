//! Post handlers.

use actix_web::{HttpResponse, web};

use board_core::domain::{Comment, PageRequest};
use board_core::ports::PostFilter;
use board_core::services::{NewPost, PostDetail, PostSummary, PostUpdate};
use board_shared::ApiResponse;
use board_shared::dto::{
    CommentResponse, DeleteParams, PageParams, PageResponse, PostCreateRequest,
    PostDetailResponse, PostSearchParams, PostSummaryResponse, PostUpdateRequest,
};

use crate::middleware::error::{AppResult, require_non_blank};
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostCreateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    require_non_blank("title", &req.title)?;
    require_non_blank("createdBy", &req.created_by)?;

    let id = state
        .posts
        .create_post(NewPost {
            title: req.title,
            content: req.content,
            created_by: req.created_by,
            tags: req.tags,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(id)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostUpdateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    require_non_blank("title", &req.title)?;
    require_non_blank("updatedBy", &req.updated_by)?;

    let id = state
        .posts
        .update_post(
            path.into_inner(),
            PostUpdate {
                title: req.title,
                content: req.content,
                updated_by: req.updated_by,
                tags: req.tags,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(id)))
}

/// DELETE /api/posts/{id}?createdBy=
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<DeleteParams>,
) -> AppResult<HttpResponse> {
    require_non_blank("createdBy", &query.created_by)?;

    let id = state
        .posts
        .delete_post(path.into_inner(), &query.created_by)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(id)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let detail = state.posts.get_post(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(detail_response(detail)))
}

/// GET /api/posts?page=&size=&title=&createdBy=&tag=
pub async fn find_posts(
    state: web::Data<AppState>,
    paging: web::Query<PageParams>,
    search: web::Query<PostSearchParams>,
) -> AppResult<HttpResponse> {
    let request = PageRequest::new(
        paging.page.unwrap_or(0),
        paging.size.unwrap_or(PageRequest::default().size),
    );
    let search = search.into_inner();
    let filter = PostFilter {
        title: non_blank(search.title),
        created_by: non_blank(search.created_by),
        tag: non_blank(search.tag),
    };

    let page = state.posts.find_page(request, &filter).await?;

    Ok(HttpResponse::Ok().json(PageResponse {
        page: page.page,
        size: page.size,
        total_elements: page.total_elements,
        total_pages: page.total_pages,
        content: page.content.into_iter().map(summary_response).collect(),
    }))
}

// `?title=` with nothing after it means no filter.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn detail_response(detail: PostDetail) -> PostDetailResponse {
    PostDetailResponse {
        id: detail.id,
        title: detail.title,
        content: detail.content,
        created_by: detail.created_by,
        updated_by: detail.updated_by,
        created_at: detail.created_at,
        tags: detail.tags,
        like_count: detail.like_count,
        comments: detail.comments.into_iter().map(comment_response).collect(),
    }
}

fn comment_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        content: comment.content,
        created_by: comment.created_by,
        updated_by: comment.updated_by,
        created_at: comment.created_at,
    }
}

fn summary_response(summary: PostSummary) -> PostSummaryResponse {
    PostSummaryResponse {
        id: summary.id,
        title: summary.title,
        created_by: summary.created_by,
        created_at: summary.created_at,
        first_tag: summary.first_tag,
        like_count: summary.like_count,
    }
}
