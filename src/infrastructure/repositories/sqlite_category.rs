use super::map_sqlx;
use crate::domain::category::{Category, CategoryId, CategoryName, CategoryRepository, NewCategory};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: Slug::new(row.slug)?,
        })
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let slug = category
            .slug
            .ok_or_else(|| DomainError::Validation("category slug must be assigned".into()))?;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug) VALUES (?, ?) RETURNING id, name, slug",
        )
        .bind(category.name.as_str())
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn find_by_slugs(&self, slugs: &[Slug]) -> DomainResult<Vec<Category>> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, name, slug FROM categories WHERE slug IN (");
        let mut separated = builder.separated(", ");
        for slug in slugs {
            separated.push_bind(slug.as_str().to_string());
        }
        separated.push_unseparated(") ORDER BY name, id");

        let rows = builder
            .build_query_as::<CategoryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
