use crate::domain::article::entity::{Article, ArticleUpdate, ArticleView, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleListQuery};
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    async fn has_like(&self, id: ArticleId, user_id: UserId) -> DomainResult<bool>;
    async fn add_like(&self, id: ArticleId, user_id: UserId) -> DomainResult<()>;
    async fn remove_like(&self, id: ArticleId, user_id: UserId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>>;
    async fn find_view_by_slug(&self, slug: &Slug) -> DomainResult<Option<ArticleView>>;
    /// One page of articles plus the total number of matches.
    async fn list_page(&self, query: &ArticleListQuery) -> DomainResult<(Vec<ArticleView>, u64)>;
}
