use crate::application::{dto::links, ports::FileStoragePort};
use crate::domain::image::Image;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImageDto {
    pub caption: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    /// `null` when the record has no stored file.
    pub image_url: Option<String>,
}

impl ImageDto {
    pub fn from_image(image: Image, storage: &FileStoragePort) -> Self {
        let image_url = links::media_url(storage, image.file.as_deref());
        Self {
            caption: image.caption.into_inner(),
            slug: image.slug.into_inner(),
            created_at: image.created_at,
            image_url,
        }
    }
}
