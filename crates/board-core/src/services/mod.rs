//! Workflow services - one transaction per operation.

mod comment;
mod like;
mod post;

pub use comment::CommentService;
pub use like::LikeService;
pub use post::{NewPost, PostDetail, PostService, PostSummary, PostUpdate};
