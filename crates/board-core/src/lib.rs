//! # Board Core
//!
//! The domain layer of the bulletin board.
//! Entities, the ownership contract, tag diffing and the workflow services
//! live here; persistence and counters are reached only through `ports`.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{CommentService, LikeService, PostService};
