use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_SLUG_LEN: usize = 50;

/// URL-safe identifier used as the external lookup key of content entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::Validation(format!(
                "slug must be at most {MAX_SLUG_LEN} characters"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::Validation(
                "slug may only contain letters, digits, hyphens and underscores".into(),
            ));
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

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Entity families that carry a slug. Uniqueness is scoped per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugKind {
    Category,
    Article,
    Comment,
    NestedComment,
    Image,
}

impl SlugKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Article => "article",
            Self::Comment => "comment",
            Self::NestedComment => "nested-comment",
            Self::Image => "image",
        }
    }

    /// Whether storage enforces a unique index on this kind's slug column.
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Category | Self::Article | Self::Image)
    }
}

impl fmt::Display for SlugKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw input a kind feeds into slug normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugSeed {
    Text(String),
    RandomDigit,
}

/// Implemented by not-yet-persisted entities whose slug may be assigned
/// right before the insert.
pub trait Sluggable {
    fn slug_kind(&self) -> SlugKind;
    fn slug_seed(&self) -> SlugSeed;
    fn slug(&self) -> Option<&Slug>;
    fn set_slug(&mut self, slug: Slug);
    fn clear_slug(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_rejects_blank_and_unsafe_values() {
        assert!(Slug::new("").is_err());
        assert!(Slug::new("   ").is_err());
        assert!(Slug::new("hello world").is_err());
        assert!(Slug::new("a/b").is_err());
        assert!(Slug::new("x".repeat(51)).is_err());
    }

    #[test]
    fn slug_accepts_kebab_and_underscores() {
        let slug = Slug::new("hello-wor_3").unwrap();
        assert_eq!(slug.as_str(), "hello-wor_3");
        assert_eq!(slug.to_string(), "hello-wor_3");
    }

    #[test]
    fn only_comment_kinds_are_not_unique() {
        assert!(SlugKind::Category.is_unique());
        assert!(SlugKind::Article.is_unique());
        assert!(SlugKind::Image.is_unique());
        assert!(!SlugKind::Comment.is_unique());
        assert!(!SlugKind::NestedComment.is_unique());
    }
}
