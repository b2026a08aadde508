use super::map_sqlx;
use crate::domain::author::{
    AuthorBio, AuthorId, AuthorProfile, AuthorProfileUpdate, AuthorRepository, NewAuthorProfile,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

#[derive(Clone)]
pub struct SqliteAuthorRepository {
    pool: SqlitePool,
}

impl SqliteAuthorRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    user_id: i64,
    picture: Option<String>,
    bio: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuthorRow> for AuthorProfile {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AuthorId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            picture: row.picture,
            bio: row.bio.map(AuthorBio::new).transpose()?,
            created_at: row.created_at,
        })
    }
}

const AUTHOR_COLUMNS: &str = "id, user_id, picture, bio, created_at";

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn insert(&self, profile: NewAuthorProfile) -> DomainResult<AuthorProfile> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "INSERT INTO author_profiles (user_id, picture, bio, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING {AUTHOR_COLUMNS}"
        ))
        .bind(i64::from(profile.user_id))
        .bind(profile.picture)
        .bind(profile.bio.map(AuthorBio::into_inner))
        .bind(profile.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        AuthorProfile::try_from(row)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Option<AuthorProfile>> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM author_profiles WHERE user_id = ?"
        ))
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(AuthorProfile::try_from).transpose()
    }

    async fn update(&self, update: AuthorProfileUpdate) -> DomainResult<AuthorProfile> {
        let AuthorProfileUpdate { id, bio, picture } = update;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE author_profiles SET id = id");
        if let Some(bio) = bio {
            builder.push(", bio = ");
            builder.push_bind(bio.map(AuthorBio::into_inner));
        }
        if let Some(picture) = picture {
            builder.push(", picture = ");
            builder.push_bind(picture);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {AUTHOR_COLUMNS}"));

        let row = builder
            .build_query_as::<AuthorRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;

        AuthorProfile::try_from(row)
    }

    async fn delete(&self, id: AuthorId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM author_profiles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("author not found".into()));
        }
        Ok(())
    }
}
