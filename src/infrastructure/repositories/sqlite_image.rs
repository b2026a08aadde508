use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::image::{Image, ImageCaption, ImageId, ImageRepository, NewImage};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteImageRepository {
    pool: SqlitePool,
}

impl SqliteImageRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ImageRow {
    id: i64,
    article_id: i64,
    caption: String,
    slug: String,
    file: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ImageRow> for Image {
    type Error = DomainError;

    fn try_from(row: ImageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ImageId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            caption: ImageCaption::new(row.caption)?,
            slug: Slug::new(row.slug)?,
            file: row.file,
            created_at: row.created_at,
        })
    }
}

const IMAGE_COLUMNS: &str = "id, article_id, caption, slug, file, created_at";

#[async_trait]
impl ImageRepository for SqliteImageRepository {
    async fn insert(&self, image: NewImage) -> DomainResult<Image> {
        let slug = image
            .slug
            .ok_or_else(|| DomainError::Validation("image slug must be assigned".into()))?;

        let row = sqlx::query_as::<_, ImageRow>(&format!(
            "INSERT INTO images (article_id, caption, slug, file, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(i64::from(image.article_id))
        .bind(image.caption.as_str())
        .bind(slug.as_str())
        .bind(image.file)
        .bind(image.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Image::try_from(row)
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Image>> {
        let row = sqlx::query_as::<_, ImageRow>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM images WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Image::try_from).transpose()
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Image>> {
        let rows = sqlx::query_as::<_, ImageRow>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM images WHERE article_id = ? ORDER BY created_at DESC, id DESC"
        ))
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Image::try_from).collect()
    }

    async fn update_caption(&self, id: ImageId, caption: ImageCaption) -> DomainResult<Image> {
        let row = sqlx::query_as::<_, ImageRow>(&format!(
            "UPDATE images SET caption = ? WHERE id = ? RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(caption.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("image not found".into()))?;

        Image::try_from(row)
    }

    async fn delete(&self, id: ImageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM images WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("image not found".into()));
        }
        Ok(())
    }
}
