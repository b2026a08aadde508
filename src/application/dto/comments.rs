use crate::application::{dto::links, ports::FileStoragePort};
use crate::domain::comment::{CommentView, NestedCommentView};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NestedCommentDto {
    pub body: String,
    pub user_name: String,
    pub user_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub slug: String,
    pub update_url: String,
}

impl NestedCommentDto {
    pub fn from_view(view: NestedCommentView, storage: &FileStoragePort) -> Self {
        let user_image = links::media_url(storage, view.user_picture.as_deref());
        let slug = view.reply.slug.into_inner();
        Self {
            body: view.reply.body.into_inner(),
            user_name: view.user_name,
            user_image,
            created_at: view.reply.created_at,
            update_url: links::reply_url(&slug),
            slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub body: String,
    pub user_name: String,
    pub user_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub slug: String,
    pub update_url: String,
    pub add_reply_url: String,
    pub replies: Vec<NestedCommentDto>,
}

impl CommentDto {
    pub fn from_view(view: CommentView, storage: &FileStoragePort) -> Self {
        let user_image = links::media_url(storage, view.user_picture.as_deref());
        let slug = view.comment.slug.into_inner();
        Self {
            body: view.comment.body.into_inner(),
            user_name: view.user_name,
            user_image,
            created_at: view.comment.created_at,
            update_url: links::comment_url(&slug),
            add_reply_url: links::comment_replies_url(&slug),
            slug,
            replies: view
                .replies
                .into_iter()
                .map(|reply| NestedCommentDto::from_view(reply, storage))
                .collect(),
        }
    }
}
