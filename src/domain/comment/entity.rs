// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugKind, SlugSeed, Sluggable};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("comment id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NestedCommentId(pub i64);

impl NestedCommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("reply id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<NestedCommentId> for i64 {
    fn from(value: NestedCommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub user_id: UserId,
    pub body: CommentBody,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub user_id: UserId,
    pub body: CommentBody,
    pub slug: Option<Slug>,
    pub created_at: DateTime<Utc>,
}

impl Sluggable for NewComment {
    fn slug_kind(&self) -> SlugKind {
        SlugKind::Comment
    }

    fn slug_seed(&self) -> SlugSeed {
        SlugSeed::Text(self.body.as_str().to_string())
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn set_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }

    fn clear_slug(&mut self) {
        self.slug = None;
    }
}

#[derive(Debug, Clone)]
pub struct NestedComment {
    pub id: NestedCommentId,
    pub parent_id: CommentId,
    pub user_id: UserId,
    pub body: CommentBody,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNestedComment {
    pub parent_id: CommentId,
    pub user_id: UserId,
    pub body: CommentBody,
    pub slug: Option<Slug>,
    pub created_at: DateTime<Utc>,
}

impl Sluggable for NewNestedComment {
    fn slug_kind(&self) -> SlugKind {
        SlugKind::NestedComment
    }

    fn slug_seed(&self) -> SlugSeed {
        SlugSeed::Text(self.body.as_str().to_string())
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn set_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }

    fn clear_slug(&mut self) {
        self.slug = None;
    }
}

#[derive(Debug, Clone)]
pub struct NestedCommentView {
    pub reply: NestedComment,
    pub user_name: String,
    pub user_picture: Option<String>,
}

/// Comment with its author's display data and replies, newest first.
#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    pub user_name: String,
    pub user_picture: Option<String>,
    pub replies: Vec<NestedCommentView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_bodies_are_rejected() {
        assert!(CommentBody::new("").is_err());
        assert!(CommentBody::new(" \n\t").is_err());
        assert_eq!(CommentBody::new("nice").unwrap().as_str(), "nice");
    }

    #[test]
    fn replies_use_their_own_slug_kind() {
        let reply = NewNestedComment {
            parent_id: CommentId::new(1).unwrap(),
            user_id: UserId::new(1).unwrap(),
            body: CommentBody::new("Agreed!").unwrap(),
            slug: None,
            created_at: Utc::now(),
        };
        assert_eq!(reply.slug_kind(), SlugKind::NestedComment);
        assert_eq!(reply.slug_seed(), SlugSeed::Text("Agreed!".into()));
    }
}
