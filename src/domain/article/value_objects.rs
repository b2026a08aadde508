use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

const MAX_TITLE_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {MAX_TITLE_LEN} characters"
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

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleSortField {
    CreatedAt,
    UpdatedAt,
    Title,
}

impl ArticleSortField {
    pub const fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Title => "title",
        }
    }
}

/// Listing order, parsed from `field` or `-field` (descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleOrdering {
    pub field: ArticleSortField,
    pub descending: bool,
}

impl Default for ArticleOrdering {
    fn default() -> Self {
        Self {
            field: ArticleSortField::UpdatedAt,
            descending: true,
        }
    }
}

impl FromStr for ArticleOrdering {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (descending, name) = trimmed
            .strip_prefix('-')
            .map_or((false, trimmed), |rest| (true, rest));
        let field = match name {
            "created_at" => ArticleSortField::CreatedAt,
            "updated_at" => ArticleSortField::UpdatedAt,
            "title" => ArticleSortField::Title,
            other => {
                return Err(DomainError::Validation(format!(
                    "unsupported ordering field '{other}'"
                )));
            }
        };
        Ok(Self { field, descending })
    }
}

#[derive(Debug, Clone)]
pub struct ArticleListQuery {
    pub search: Option<String>,
    pub ordering: ArticleOrdering,
    pub page: u32,
    pub page_size: u32,
}
