//! Like handlers.

use actix_web::{HttpResponse, web};

use board_shared::ApiResponse;
use board_shared::dto::LikeCreateRequest;

use crate::middleware::error::{AppResult, require_non_blank};
use crate::state::AppState;

/// POST /api/posts/{id}/likes
pub async fn create_like(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<LikeCreateRequest>,
) -> AppResult<HttpResponse> {
    require_non_blank("createdBy", &body.created_by)?;

    let id = state
        .likes
        .create_like(path.into_inner(), &body.created_by)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(id)))
}
