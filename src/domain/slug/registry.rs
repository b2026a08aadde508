use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::SlugKind;
use async_trait::async_trait;

/// Point-in-time view over the slugs already persisted for each kind.
#[async_trait]
pub trait SlugRegistry: Send + Sync {
    async fn slug_taken(&self, kind: SlugKind, candidate: &str) -> DomainResult<bool>;
}
