use super::{group_by_owner, map_sqlx};
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleListQuery, ArticleReadRepository, ArticleTitle,
    ArticleUpdate, ArticleView, ArticleWriteRepository, NewArticle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author_id: i64,
    title: Option<String>,
    content: String,
    featured: bool,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            title: row.title.map(ArticleTitle::new).transpose()?,
            content: ArticleContent::new(row.content)?,
            featured: row.featured,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleViewRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    author_name: String,
    author_picture: Option<String>,
}

const ARTICLE_COLUMNS: &str = "id, author_id, title, content, featured, slug, created_at, updated_at";

const VIEW_SELECT: &str = "SELECT a.id AS id, a.author_id AS author_id, a.title AS title, \
     a.content AS content, a.featured AS featured, a.slug AS slug, \
     a.created_at AS created_at, a.updated_at AS updated_at, \
     u.username AS author_name, ap.picture AS author_picture \
     FROM articles a \
     JOIN users u ON u.id = a.author_id \
     LEFT JOIN author_profiles ap ON ap.user_id = a.author_id";

async fn link_categories(
    conn: &mut SqliteConnection,
    article_id: i64,
    category_ids: &[CategoryId],
) -> DomainResult<()> {
    for category_id in category_ids {
        sqlx::query("INSERT OR IGNORE INTO article_categories (article_id, category_id) VALUES (?, ?)")
            .bind(article_id)
            .bind(i64::from(*category_id))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author_id,
            title,
            content,
            featured,
            category_ids,
            slug,
            created_at,
            updated_at,
        } = article;
        let slug =
            slug.ok_or_else(|| DomainError::Validation("article slug must be assigned".into()))?;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (author_id, title, content, featured, slug, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(i64::from(author_id))
        .bind(title.map(ArticleTitle::into_inner))
        .bind(content.as_str())
        .bind(featured)
        .bind(slug.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        link_categories(&mut tx, row.id, &category_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            featured,
            category_ids,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET title = COALESCE(?, title), content = COALESCE(?, content),
             featured = COALESCE(?, featured), updated_at = ?
             WHERE id = ?
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.map(ArticleTitle::into_inner))
        .bind(content.map(ArticleContent::into_inner))
        .bind(featured)
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(category_ids) = category_ids {
            sqlx::query("DELETE FROM article_categories WHERE article_id = ?")
                .bind(row.id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            link_categories(&mut tx, row.id, &category_ids).await?;
        }
        tx.commit().await.map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn has_like(&self, id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM article_likes WHERE article_id = ? AND user_id = ?)",
        )
        .bind(i64::from(id))
        .bind(i64::from(user_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(found != 0)
    }

    async fn add_like(&self, id: ArticleId, user_id: UserId) -> DomainResult<()> {
        sqlx::query("INSERT OR IGNORE INTO article_likes (article_id, user_id) VALUES (?, ?)")
            .bind(i64::from(id))
            .bind(i64::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn remove_like(&self, id: ArticleId, user_id: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM article_likes WHERE article_id = ? AND user_id = ?")
            .bind(i64::from(id))
            .bind(i64::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

impl SqliteArticleReadRepository {
    /// `(article id, text)` pairs for the given articles, `head` ending in
    /// `IN (` and `tail` closing it.
    async fn fetch_pairs(
        &self,
        head: &str,
        article_ids: &[i64],
        tail: &str,
    ) -> DomainResult<Vec<(i64, String)>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(head);
        let mut separated = builder.separated(", ");
        for id in article_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(tail);

        builder
            .build_query_as::<(i64, String)>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn attach_relations(&self, rows: Vec<ArticleViewRow>) -> DomainResult<Vec<ArticleView>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = rows.iter().map(|row| row.article.id).collect();

        let mut categories = group_by_owner(
            self.fetch_pairs(
                "SELECT ac.article_id, c.name FROM article_categories ac \
                 JOIN categories c ON c.id = ac.category_id WHERE ac.article_id IN (",
                &ids,
                ") ORDER BY c.name",
            )
            .await?,
        );
        let mut likers = group_by_owner(
            self.fetch_pairs(
                "SELECT al.article_id, u.username FROM article_likes al \
                 JOIN users u ON u.id = al.user_id WHERE al.article_id IN (",
                &ids,
                ") ORDER BY u.username",
            )
            .await?,
        );

        rows.into_iter()
            .map(|row| {
                let id = row.article.id;
                Ok(ArticleView {
                    article: Article::try_from(row.article)?,
                    author_name: row.author_name,
                    author_picture: row.author_picture,
                    category_names: categories.remove(&id).unwrap_or_default(),
                    liker_names: likers.remove(&id).unwrap_or_default(),
                })
            })
            .collect()
    }
}

fn apply_search(builder: &mut QueryBuilder<'_, Sqlite>, pattern: Option<&str>) {
    if let Some(pattern) = pattern {
        builder.push(" WHERE (a.content LIKE ");
        builder.push_bind(pattern.to_string());
        builder.push(" OR a.title LIKE ");
        builder.push_bind(pattern.to_string());
        builder.push(" OR u.username LIKE ");
        builder.push_bind(pattern.to_string());
        builder.push(")");
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_view_by_slug(&self, slug: &Slug) -> DomainResult<Option<ArticleView>> {
        let row = sqlx::query_as::<_, ArticleViewRow>(&format!("{VIEW_SELECT} WHERE a.slug = ?"))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.attach_relations(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list_page(&self, query: &ArticleListQuery) -> DomainResult<(Vec<ArticleView>, u64)> {
        let page = query.page.max(1);
        let page_size = query.page_size.max(1);
        let offset = i64::from(page - 1) * i64::from(page_size);
        let pattern = query.search.as_deref().map(|term| format!("%{term}%"));
        let direction = if query.ordering.descending { "DESC" } else { "ASC" };

        let mut list_builder: QueryBuilder<Sqlite> = QueryBuilder::new(VIEW_SELECT);
        apply_search(&mut list_builder, pattern.as_deref());
        list_builder.push(format!(
            " ORDER BY a.{column} {direction}, a.id {direction} LIMIT ",
            column = query.ordering.field.column()
        ));
        list_builder.push_bind(i64::from(page_size));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(offset);

        let rows = list_builder
            .build_query_as::<ArticleViewRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT COUNT(1) FROM articles a JOIN users u ON u.id = a.author_id",
        );
        apply_search(&mut count_builder, pattern.as_deref());

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let views = self.attach_relations(rows).await?;
        Ok((views, u64::try_from(total).unwrap_or_default()))
    }
}
