pub mod entity;
pub mod repository;

pub use entity::{
    Comment, CommentBody, CommentId, CommentView, NestedComment, NestedCommentId,
    NestedCommentView, NewComment, NewNestedComment,
};
pub use repository::{CommentRepository, NestedCommentRepository};
