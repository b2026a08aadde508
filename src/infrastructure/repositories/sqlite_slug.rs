use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{SlugKind, SlugRegistry};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Answers slug existence checks straight from the entity tables.
#[derive(Clone)]
pub struct SqliteSlugRegistry {
    pool: SqlitePool,
}

impl SqliteSlugRegistry {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const fn table_for(kind: SlugKind) -> &'static str {
    match kind {
        SlugKind::Category => "categories",
        SlugKind::Article => "articles",
        SlugKind::Comment => "comments",
        SlugKind::NestedComment => "nested_comments",
        SlugKind::Image => "images",
    }
}

#[async_trait]
impl SlugRegistry for SqliteSlugRegistry {
    async fn slug_taken(&self, kind: SlugKind, candidate: &str) -> DomainResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE slug = ?)",
            table_for(kind)
        );
        let found = sqlx::query_scalar::<_, i64>(&sql)
            .bind(candidate)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(found != 0)
    }
}
