//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod counter;
mod repository;
mod unit_of_work;

pub use counter::{CounterError, CounterStore, like_count_key};
pub use repository::{
    BaseRepository, CommentRepository, LikeRepository, PostFilter, PostRepository, TagRepository,
};
pub use unit_of_work::{Transaction, UnitOfWork};
