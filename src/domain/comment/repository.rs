use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{
    Comment, CommentBody, CommentId, CommentView, NestedComment, NestedCommentId,
    NestedCommentView, NewComment, NewNestedComment,
};
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

/// Comment slugs are not unique in storage; lookups by slug resolve to the
/// oldest matching row.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Comment>>;
    async fn find_view(&self, id: CommentId) -> DomainResult<Option<CommentView>>;
    async fn find_view_by_slug(&self, slug: &Slug) -> DomainResult<Option<CommentView>>;
    async fn list_views_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<CommentView>>;
    async fn update_body(&self, id: CommentId, body: CommentBody) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}

#[async_trait]
pub trait NestedCommentRepository: Send + Sync {
    async fn insert(&self, reply: NewNestedComment) -> DomainResult<NestedComment>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<NestedComment>>;
    async fn find_view(&self, id: NestedCommentId) -> DomainResult<Option<NestedCommentView>>;
    async fn find_view_by_slug(&self, slug: &Slug) -> DomainResult<Option<NestedCommentView>>;
    async fn update_body(&self, id: NestedCommentId, body: CommentBody) -> DomainResult<NestedComment>;
    async fn delete(&self, id: NestedCommentId) -> DomainResult<()>;
}
