use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::image::entity::{Image, ImageCaption, ImageId, NewImage};
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn insert(&self, image: NewImage) -> DomainResult<Image>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Image>>;
    /// Newest first.
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Image>>;
    async fn update_caption(&self, id: ImageId, caption: ImageCaption) -> DomainResult<Image>;
    async fn delete(&self, id: ImageId) -> DomainResult<()>;
}
