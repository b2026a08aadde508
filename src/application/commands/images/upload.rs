use chrono::Datelike;
use uuid::Uuid;

use super::ImageCommandService;
use crate::{
    application::{
        commands::capability::ensure_can_modify,
        dto::{AuthenticatedUser, ImageDto},
        error::{ApplicationError, ApplicationResult},
        ports::storage::UploadedFile,
    },
    domain::{
        article::Article,
        image::{ImageCaption, NewImage},
        slug::Slug,
    },
};

/// Attach one image record per uploaded file to an article. The caption, if
/// any, is shared by all of them.
pub struct UploadImagesCommand {
    pub article_slug: String,
    pub caption: Option<String>,
    pub files: Vec<UploadedFile>,
}

impl ImageCommandService {
    pub async fn upload_images(
        &self,
        actor: &AuthenticatedUser,
        command: UploadImagesCommand,
    ) -> ApplicationResult<Vec<ImageDto>> {
        let slug = Slug::new(command.article_slug)?;
        let article = self
            .article_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        ensure_can_modify(actor, "images", "create", article.author_id)?;

        if command.files.is_empty() {
            return Err(ApplicationError::validation("no image was uploaded"));
        }
        let caption = ImageCaption::new(command.caption.unwrap_or_default())?;

        let mut created = Vec::with_capacity(command.files.len());
        for file in command.files {
            let image = self.store_one(&article, caption.clone(), file).await?;
            created.push(ImageDto::from_image(image, self.storage.as_ref()));
        }
        Ok(created)
    }

    async fn store_one(
        &self,
        article: &Article,
        caption: ImageCaption,
        file: UploadedFile,
    ) -> ApplicationResult<crate::domain::image::Image> {
        let now = self.clock.now();
        let key = format!(
            "article/{:04}/{:02}/{}.{}",
            now.year(),
            now.month(),
            Uuid::new_v4().simple(),
            file.extension()
        );
        self.storage.save(&key, file.contents).await?;

        let new_image = NewImage {
            article_id: article.id,
            caption,
            slug: None,
            file: Some(key.clone()),
            created_at: now,
        };
        match self
            .slug_service
            .assign_and_insert(new_image, |image| self.image_repo.insert(image))
            .await
        {
            Ok(image) => {
                tracing::info!(article_id = article.id.0, slug = %image.slug, file = %key, "image stored");
                Ok(image)
            }
            Err(err) => {
                self.lifecycle.discard_file(&key).await;
                Err(err.into())
            }
        }
    }
}
