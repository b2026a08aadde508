use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_can_modify,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        lifecycle::EntityLifecycle,
        ports::{FileStoragePort, time::Clock},
    },
    domain::{
        article::ArticleReadRepository,
        image::{Image, ImageRepository},
        slug::{Slug, SlugAssignmentService},
    },
};

pub struct ImageCommandService {
    pub(super) image_repo: Arc<dyn ImageRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slug_service: Arc<SlugAssignmentService>,
    pub(super) storage: Arc<FileStoragePort>,
    pub(super) lifecycle: Arc<EntityLifecycle>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ImageCommandService {
    pub fn new(
        image_repo: Arc<dyn ImageRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        slug_service: Arc<SlugAssignmentService>,
        storage: Arc<FileStoragePort>,
        lifecycle: Arc<EntityLifecycle>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            image_repo,
            article_repo,
            slug_service,
            storage,
            lifecycle,
            clock,
        }
    }

    /// Load an image and check `images:<action>` against the owner of its
    /// article.
    pub(super) async fn load_for(
        &self,
        actor: &AuthenticatedUser,
        slug: &str,
        action: &str,
    ) -> ApplicationResult<Image> {
        let slug = Slug::new(slug)?;
        let image = self
            .image_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("image not found"))?;
        let article = self
            .article_repo
            .find_by_id(image.article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        ensure_can_modify(actor, "images", action, article.author_id)?;
        Ok(image)
    }
}
