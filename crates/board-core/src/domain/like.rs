use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UNSAVED_ID;

/// A single "like" given to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: i64,
    pub post_id: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(post_id: i64, created_by: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            post_id,
            created_by: created_by.into(),
            created_at: Utc::now(),
        }
    }
}
