// src/domain/image/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugKind, SlugSeed, Sluggable};
use chrono::{DateTime, Utc};

const MAX_CAPTION_LEN: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub i64);

impl ImageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("image id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ImageId> for i64 {
    fn from(value: ImageId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCaption(String);

impl ImageCaption {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > MAX_CAPTION_LEN {
            return Err(DomainError::Validation(format!(
                "caption must be at most {MAX_CAPTION_LEN} characters"
            )));
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
pub struct Image {
    pub id: ImageId,
    pub article_id: ArticleId,
    pub caption: ImageCaption,
    pub slug: Slug,
    /// Storage key of the uploaded file.
    pub file: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewImage {
    pub article_id: ArticleId,
    pub caption: ImageCaption,
    pub slug: Option<Slug>,
    pub file: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Sluggable for NewImage {
    fn slug_kind(&self) -> SlugKind {
        SlugKind::Image
    }

    fn slug_seed(&self) -> SlugSeed {
        SlugSeed::RandomDigit
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_length_is_bounded() {
        assert!(ImageCaption::new("").is_ok());
        assert!(ImageCaption::new("c".repeat(300)).is_ok());
        assert!(ImageCaption::new("c".repeat(301)).is_err());
    }
}
