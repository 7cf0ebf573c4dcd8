//! Domain entities - the core business objects.

mod comment;
mod like;
mod ownership;
mod page;
mod post;
mod tag;

pub use comment::Comment;
pub use like::Like;
pub use ownership::Owned;
pub use page::{Page, PageRequest};
pub use post::Post;
pub use tag::{Tag, TagDiff};

/// Identifier carried by entities that have not been persisted yet.
pub const UNSAVED_ID: i64 = 0;
