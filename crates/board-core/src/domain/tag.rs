use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UNSAVED_ID;

/// Tag attached to a single post. Tag order is insertion (id) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn new(post_id: i64, name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            post_id,
            name: name.into(),
            created_by: created_by.into(),
            created_at: Utc::now(),
        }
    }
}

/// Difference between a post's stored tag list and a requested one.
///
/// Applying a non-empty diff always means storing the requested list as a
/// whole, in the requested order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    /// Names present in the requested list but not stored.
    pub added: Vec<String>,
    /// Names stored but absent from the requested list.
    pub removed: Vec<String>,
    /// Same names on both sides, different sequence.
    pub order_changed: bool,
}

impl TagDiff {
    pub fn between(current: &[String], requested: &[String]) -> Self {
        let added: Vec<String> = requested
            .iter()
            .filter(|name| !current.contains(name))
            .cloned()
            .collect();
        let removed: Vec<String> = current
            .iter()
            .filter(|name| !requested.contains(name))
            .cloned()
            .collect();
        let order_changed = added.is_empty() && removed.is_empty() && current != requested;

        Self {
            added,
            removed,
            order_changed,
        }
    }

    /// True when the stored list already equals the requested one.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && !self.order_changed
    }
}
