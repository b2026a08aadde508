use std::sync::Arc;

use crate::{
    application::ports::FileStoragePort,
    domain::{article::ArticleReadRepository, comment::CommentRepository, image::ImageRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) image_repo: Arc<dyn ImageRepository>,
    pub(super) storage: Arc<FileStoragePort>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        image_repo: Arc<dyn ImageRepository>,
        storage: Arc<FileStoragePort>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            image_repo,
            storage,
        }
    }
}
