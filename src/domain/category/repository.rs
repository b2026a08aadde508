use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
    async fn find_by_slugs(&self, slugs: &[Slug]) -> DomainResult<Vec<Category>>;
}
