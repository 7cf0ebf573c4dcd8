use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Owned, UNSAVED_ID};
use crate::error::DomainError;

/// Post entity - a bulletin board article.
///
/// Tags and comments are stored separately and keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, not yet persisted post.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UNSAVED_ID,
            title: title.into(),
            content: content.into(),
            created_by: created_by.into(),
            updated_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite title and content on behalf of `updated_by`.
    ///
    /// Fails with `NotUpdatable` unless `updated_by` created the post.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        updated_by: &str,
    ) -> Result<(), DomainError> {
        if !self.is_owned_by(updated_by) {
            return Err(DomainError::NotUpdatable {
                entity: "post",
                id: self.id,
            });
        }

        self.title = title.into();
        self.content = content.into();
        self.updated_by = Some(updated_by.to_string());
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Owned for Post {
    fn created_by(&self) -> &str {
        &self.created_by
    }
}
