//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateRequest {
    pub title: String,
    pub content: String,
    pub created_by: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request to update a post. Omitting `tags` leaves them unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdateRequest {
    pub title: String,
    pub content: String,
    pub updated_by: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Query parameters of the post list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSearchParams {
    pub title: Option<String>,
    pub created_by: Option<String>,
    pub tag: Option<String>,
}

/// Zero-based paging query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

/// Identifies who deletes a resource: `?createdBy=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteParams {
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateRequest {
    pub content: String,
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdateRequest {
    pub content: String,
    pub updated_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCreateRequest {
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub created_by: String,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Full view of one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub like_count: i64,
    pub comments: Vec<CommentResponse>,
}

/// One row of the post list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryResponse {
    pub id: i64,
    pub title: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub first_tag: Option<String>,
    pub like_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_tags_default_to_empty() {
        let req: PostCreateRequest = serde_json::from_str(
            r#"{"title":"제목","content":"내용","createdBy":"haeni"}"#,
        )
        .unwrap();
        assert_eq!(req.created_by, "haeni");
        assert!(req.tags.is_empty());
    }

    #[test]
    fn update_request_distinguishes_missing_and_empty_tags() {
        let missing: PostUpdateRequest =
            serde_json::from_str(r#"{"title":"t","content":"c","updatedBy":"haeni"}"#).unwrap();
        assert!(missing.tags.is_none());

        let empty: PostUpdateRequest = serde_json::from_str(
            r#"{"title":"t","content":"c","updatedBy":"haeni","tags":[]}"#,
        )
        .unwrap();
        assert_eq!(empty.tags, Some(vec![]));
    }
}
