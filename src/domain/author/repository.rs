use crate::domain::author::entity::{AuthorId, AuthorProfile, AuthorProfileUpdate, NewAuthorProfile};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn insert(&self, profile: NewAuthorProfile) -> DomainResult<AuthorProfile>;
    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Option<AuthorProfile>>;
    async fn update(&self, update: AuthorProfileUpdate) -> DomainResult<AuthorProfile>;
    async fn delete(&self, id: AuthorId) -> DomainResult<()>;
}
