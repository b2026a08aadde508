use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{FileStoragePort, time::Clock},
    },
    domain::{
        article::ArticleReadRepository,
        comment::{Comment, CommentRepository, NestedComment, NestedCommentRepository},
        slug::{Slug, SlugAssignmentService},
    },
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) reply_repo: Arc<dyn NestedCommentRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slug_service: Arc<SlugAssignmentService>,
    pub(super) storage: Arc<FileStoragePort>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        reply_repo: Arc<dyn NestedCommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        slug_service: Arc<SlugAssignmentService>,
        storage: Arc<FileStoragePort>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            reply_repo,
            article_repo,
            slug_service,
            storage,
            clock,
        }
    }

    pub(super) async fn load_comment(&self, slug: &str) -> ApplicationResult<Comment> {
        let slug = Slug::new(slug)?;
        self.comment_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))
    }

    pub(super) async fn load_reply(&self, slug: &str) -> ApplicationResult<NestedComment> {
        let slug = Slug::new(slug)?;
        self.reply_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("reply not found"))
    }
}
