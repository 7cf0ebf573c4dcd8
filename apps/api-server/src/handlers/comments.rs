//! Comment handlers.

use actix_web::{HttpResponse, web};

use board_shared::ApiResponse;
use board_shared::dto::{CommentCreateRequest, CommentUpdateRequest, DeleteParams};

use crate::middleware::error::{AppResult, require_non_blank};
use crate::state::AppState;

/// POST /api/posts/{id}/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CommentCreateRequest>,
) -> AppResult<HttpResponse> {
    require_non_blank("createdBy", &body.created_by)?;

    let id = state
        .comments
        .create_comment(path.into_inner(), &body.content, &body.created_by)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(id)))
}

/// PUT /api/comments/{id}
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CommentUpdateRequest>,
) -> AppResult<HttpResponse> {
    require_non_blank("updatedBy", &body.updated_by)?;

    let id = state
        .comments
        .update_comment(path.into_inner(), &body.content, &body.updated_by)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(id)))
}

/// DELETE /api/comments/{id}?createdBy=
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<DeleteParams>,
) -> AppResult<HttpResponse> {
    require_non_blank("createdBy", &query.created_by)?;

    let id = state
        .comments
        .delete_comment(path.into_inner(), &query.created_by)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(id)))
}
