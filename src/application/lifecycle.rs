//! Side effects tied to entity creation and removal, invoked explicitly by
//! the command services.
use std::sync::Arc;

use crate::application::ports::{ClockPort, FileStoragePort};
use crate::domain::{
    article::Article,
    author::{AuthorProfile, AuthorRepository, DEFAULT_PICTURE, NewAuthorProfile},
    image::{Image, ImageRepository},
    user::User,
};

pub struct EntityLifecycle {
    author_repo: Arc<dyn AuthorRepository>,
    image_repo: Arc<dyn ImageRepository>,
    storage: Arc<FileStoragePort>,
    clock: Arc<ClockPort>,
}

impl EntityLifecycle {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        image_repo: Arc<dyn ImageRepository>,
        storage: Arc<FileStoragePort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            author_repo,
            image_repo,
            storage,
            clock,
        }
    }

    /// Give a freshly registered user an author profile. Failures are logged
    /// and never reach the caller.
    pub async fn after_user_created(&self, user: &User) {
        let profile = NewAuthorProfile::for_user(user.id, self.clock.now());
        match self.author_repo.insert(profile).await {
            Ok(created) => {
                tracing::info!(user_id = user.id.0, author_id = created.id.0, "author profile created");
            }
            Err(err) => {
                tracing::warn!(user_id = user.id.0, error = %err, "failed to create author profile");
            }
        }
    }

    pub async fn before_image_deleted(&self, image: &Image) {
        if let Some(file) = image.file.as_deref() {
            self.discard_file(file).await;
        }
    }

    pub async fn before_author_deleted(&self, profile: &AuthorProfile) {
        if let Some(picture) = profile.owned_picture() {
            self.discard_file(picture).await;
        }
    }

    /// The database cascade removes image rows but not their files.
    pub async fn before_article_deleted(&self, article: &Article) {
        match self.image_repo.list_for_article(article.id).await {
            Ok(images) => {
                for image in &images {
                    self.before_image_deleted(image).await;
                }
            }
            Err(err) => {
                tracing::warn!(
                    article_id = article.id.0,
                    error = %err,
                    "failed to list images of deleted article"
                );
            }
        }
    }

    /// Best-effort removal of a stored file. The shared default picture is
    /// kept.
    pub async fn discard_file(&self, key: &str) {
        if key.is_empty() || key == DEFAULT_PICTURE {
            return;
        }
        if let Err(err) = self.storage.delete(key).await {
            tracing::warn!(file = key, error = %err, "failed to delete stored file");
        }
    }
}
