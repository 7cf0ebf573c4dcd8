//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures surfaced to the caller.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found: id {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{entity} {id} cannot be updated by this user")]
    NotUpdatable { entity: &'static str, id: i64 },

    #[error("{entity} {id} cannot be deleted by this user")]
    NotDeletable { entity: &'static str, id: i64 },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn post_not_found(id: i64) -> Self {
        Self::NotFound { entity: "post", id }
    }

    pub fn comment_not_found(id: i64) -> Self {
        Self::NotFound { entity: "comment", id }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Transaction failed: {0}")]
    Transaction(String),
}
