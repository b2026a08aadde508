use std::sync::Arc;

use crate::{
    application::{
        dto::ImageDto,
        error::{ApplicationError, ApplicationResult},
        ports::FileStoragePort,
    },
    domain::{image::ImageRepository, slug::Slug},
};

pub struct ImageQueryService {
    image_repo: Arc<dyn ImageRepository>,
    storage: Arc<FileStoragePort>,
}

impl ImageQueryService {
    pub fn new(image_repo: Arc<dyn ImageRepository>, storage: Arc<FileStoragePort>) -> Self {
        Self {
            image_repo,
            storage,
        }
    }

    pub async fn get_image(&self, slug: &str) -> ApplicationResult<ImageDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("image not found"))?;
        let image = self
            .image_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("image not found"))?;
        Ok(ImageDto::from_image(image, self.storage.as_ref()))
    }
}
