// src/domain/category/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugKind, SlugSeed, Sluggable};
use std::fmt;

const MAX_NAME_LEN: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("category name cannot be empty".into()));
        }
        if value.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "category name must be at most {MAX_NAME_LEN} characters"
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

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Option<Slug>,
}

impl Sluggable for NewCategory {
    fn slug_kind(&self) -> SlugKind {
        SlugKind::Category
    }

    fn slug_seed(&self) -> SlugSeed {
        SlugSeed::Text(self.name.as_str().to_string())
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
