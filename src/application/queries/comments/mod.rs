use std::sync::Arc;

use crate::{
    application::{
        dto::{CommentDto, NestedCommentDto},
        error::{ApplicationError, ApplicationResult},
        ports::FileStoragePort,
    },
    domain::{
        comment::{CommentRepository, NestedCommentRepository},
        slug::Slug,
    },
};

pub struct CommentQueryService {
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn NestedCommentRepository>,
    storage: Arc<FileStoragePort>,
}

impl CommentQueryService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        reply_repo: Arc<dyn NestedCommentRepository>,
        storage: Arc<FileStoragePort>,
    ) -> Self {
        Self {
            comment_repo,
            reply_repo,
            storage,
        }
    }

    pub async fn get_comment(&self, slug: &str) -> ApplicationResult<CommentDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("comment not found"))?;
        let view = self
            .comment_repo
            .find_view_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        Ok(CommentDto::from_view(view, self.storage.as_ref()))
    }

    pub async fn get_reply(&self, slug: &str) -> ApplicationResult<NestedCommentDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("reply not found"))?;
        let view = self
            .reply_repo
            .find_view_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("reply not found"))?;
        Ok(NestedCommentDto::from_view(view, self.storage.as_ref()))
    }
}
