mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateCommentCommand, CreateReplyCommand};
pub use delete::{DeleteCommentCommand, DeleteReplyCommand};
pub use service::CommentCommandService;
pub use update::{UpdateCommentCommand, UpdateReplyCommand};
