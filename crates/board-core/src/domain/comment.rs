use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Owned, UNSAVED_ID};
use crate::error::DomainError;

/// Comment entity - always attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub created_by: String,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: i64, content: impl Into<String>, created_by: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UNSAVED_ID,
            post_id,
            content: content.into(),
            created_by: created_by.into(),
            updated_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content on behalf of `updated_by`.
    pub fn update(
        &mut self,
        content: impl Into<String>,
        updated_by: &str,
    ) -> Result<(), DomainError> {
        if !self.is_owned_by(updated_by) {
            return Err(DomainError::NotUpdatable {
                entity: "comment",
                id: self.id,
            });
        }

        self.content = content.into();
        self.updated_by = Some(updated_by.to_string());
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Owned for Comment {
    fn created_by(&self) -> &str {
        &self.created_by
    }
}
