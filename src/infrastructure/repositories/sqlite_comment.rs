use super::{group_by_owner, map_sqlx};
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentRepository, CommentView, NestedComment,
    NestedCommentId, NestedCommentRepository, NestedCommentView, NewComment, NewNestedComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Encode, FromRow, QueryBuilder, Sqlite, SqlitePool, Type};
use std::collections::HashMap;

#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteNestedCommentRepository {
    pool: SqlitePool,
}

impl SqliteNestedCommentRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    user_id: i64,
    body: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            user_id: UserId::new(row.user_id)?,
            body: CommentBody::new(row.body)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentViewRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    user_name: String,
    user_picture: Option<String>,
}

#[derive(Debug, FromRow)]
struct ReplyRow {
    id: i64,
    parent_id: i64,
    user_id: i64,
    body: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReplyRow> for NestedComment {
    type Error = DomainError;

    fn try_from(row: ReplyRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: NestedCommentId::new(row.id)?,
            parent_id: CommentId::new(row.parent_id)?,
            user_id: UserId::new(row.user_id)?,
            body: CommentBody::new(row.body)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ReplyViewRow {
    #[sqlx(flatten)]
    reply: ReplyRow,
    user_name: String,
    user_picture: Option<String>,
}

impl TryFrom<ReplyViewRow> for NestedCommentView {
    type Error = DomainError;

    fn try_from(row: ReplyViewRow) -> Result<Self, Self::Error> {
        Ok(Self {
            reply: NestedComment::try_from(row.reply)?,
            user_name: row.user_name,
            user_picture: row.user_picture,
        })
    }
}

const COMMENT_COLUMNS: &str = "id, article_id, user_id, body, slug, created_at";
const REPLY_COLUMNS: &str = "id, parent_id, user_id, body, slug, created_at";

const COMMENT_VIEW_SELECT: &str = "SELECT c.id AS id, c.article_id AS article_id, \
     c.user_id AS user_id, c.body AS body, c.slug AS slug, c.created_at AS created_at, \
     u.username AS user_name, ap.picture AS user_picture \
     FROM comments c \
     JOIN users u ON u.id = c.user_id \
     LEFT JOIN author_profiles ap ON ap.user_id = c.user_id";

const REPLY_VIEW_SELECT: &str = "SELECT n.id AS id, n.parent_id AS parent_id, \
     n.user_id AS user_id, n.body AS body, n.slug AS slug, n.created_at AS created_at, \
     u.username AS user_name, ap.picture AS user_picture \
     FROM nested_comments n \
     JOIN users u ON u.id = n.user_id \
     LEFT JOIN author_profiles ap ON ap.user_id = n.user_id";

/// Replies of the given comments, newest first, keyed by parent id.
async fn reply_views_for(
    pool: &SqlitePool,
    parent_ids: &[i64],
) -> DomainResult<HashMap<i64, Vec<NestedCommentView>>> {
    if parent_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("{REPLY_VIEW_SELECT} WHERE n.parent_id IN ("));
    let mut separated = builder.separated(", ");
    for id in parent_ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(") ORDER BY n.created_at DESC, n.id DESC");

    let rows = builder
        .build_query_as::<ReplyViewRow>()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

    let pairs = rows
        .into_iter()
        .map(|row| {
            let parent = row.reply.parent_id;
            NestedCommentView::try_from(row).map(|view| (parent, view))
        })
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(group_by_owner(pairs))
}

impl SqliteCommentRepository {
    async fn assemble(&self, rows: Vec<CommentViewRow>) -> DomainResult<Vec<CommentView>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.comment.id).collect();
        let mut replies = reply_views_for(&self.pool, &ids).await?;

        rows.into_iter()
            .map(|row| {
                let id = row.comment.id;
                Ok(CommentView {
                    comment: Comment::try_from(row.comment)?,
                    user_name: row.user_name,
                    user_picture: row.user_picture,
                    replies: replies.remove(&id).unwrap_or_default(),
                })
            })
            .collect()
    }

    async fn find_one_view<V>(&self, filter: &str, value: V) -> DomainResult<Option<CommentView>>
    where
        V: for<'q> Encode<'q, Sqlite> + Type<Sqlite> + Send + 'static,
    {
        let row = sqlx::query_as::<_, CommentViewRow>(&format!(
            "{COMMENT_VIEW_SELECT} WHERE {filter} ORDER BY c.id LIMIT 1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.assemble(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let slug = comment
            .slug
            .ok_or_else(|| DomainError::Validation("comment slug must be assigned".into()))?;

        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (article_id, user_id, body, slug, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(comment.article_id))
        .bind(i64::from(comment.user_id))
        .bind(comment.body.as_str())
        .bind(slug.as_str())
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE slug = ? ORDER BY id LIMIT 1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn find_view(&self, id: CommentId) -> DomainResult<Option<CommentView>> {
        self.find_one_view("c.id = ?", i64::from(id))
            .await
    }

    async fn find_view_by_slug(&self, slug: &Slug) -> DomainResult<Option<CommentView>> {
        self.find_one_view("c.slug = ?", slug.as_str().to_string())
            .await
    }

    async fn list_views_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<CommentView>> {
        let rows = sqlx::query_as::<_, CommentViewRow>(&format!(
            "{COMMENT_VIEW_SELECT} WHERE c.article_id = ? ORDER BY c.created_at DESC, c.id DESC"
        ))
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.assemble(rows).await
    }

    async fn update_body(&self, id: CommentId, body: CommentBody) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "UPDATE comments SET body = ? WHERE id = ? RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(body.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

impl SqliteNestedCommentRepository {
    async fn find_one_view<V>(
        &self,
        filter: &str,
        value: V,
    ) -> DomainResult<Option<NestedCommentView>>
    where
        V: for<'q> Encode<'q, Sqlite> + Type<Sqlite> + Send + 'static,
    {
        let row = sqlx::query_as::<_, ReplyViewRow>(&format!(
            "{REPLY_VIEW_SELECT} WHERE {filter} ORDER BY n.id LIMIT 1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(NestedCommentView::try_from).transpose()
    }
}

#[async_trait]
impl NestedCommentRepository for SqliteNestedCommentRepository {
    async fn insert(&self, reply: NewNestedComment) -> DomainResult<NestedComment> {
        let slug = reply
            .slug
            .ok_or_else(|| DomainError::Validation("reply slug must be assigned".into()))?;

        let row = sqlx::query_as::<_, ReplyRow>(&format!(
            "INSERT INTO nested_comments (parent_id, user_id, body, slug, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {REPLY_COLUMNS}"
        ))
        .bind(i64::from(reply.parent_id))
        .bind(i64::from(reply.user_id))
        .bind(reply.body.as_str())
        .bind(slug.as_str())
        .bind(reply.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        NestedComment::try_from(row)
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<NestedComment>> {
        let row = sqlx::query_as::<_, ReplyRow>(&format!(
            "SELECT {REPLY_COLUMNS} FROM nested_comments WHERE slug = ? ORDER BY id LIMIT 1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(NestedComment::try_from).transpose()
    }

    async fn find_view(&self, id: NestedCommentId) -> DomainResult<Option<NestedCommentView>> {
        self.find_one_view("n.id = ?", i64::from(id))
            .await
    }

    async fn find_view_by_slug(&self, slug: &Slug) -> DomainResult<Option<NestedCommentView>> {
        self.find_one_view("n.slug = ?", slug.as_str().to_string())
            .await
    }

    async fn update_body(
        &self,
        id: NestedCommentId,
        body: CommentBody,
    ) -> DomainResult<NestedComment> {
        let row = sqlx::query_as::<_, ReplyRow>(&format!(
            "UPDATE nested_comments SET body = ? WHERE id = ? RETURNING {REPLY_COLUMNS}"
        ))
        .bind(body.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("reply not found".into()))?;

        NestedComment::try_from(row)
    }

    async fn delete(&self, id: NestedCommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM nested_comments WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("reply not found".into()));
        }
        Ok(())
    }
}
