// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_author;
mod sqlite_category;
mod sqlite_comment;
mod sqlite_image;
mod sqlite_slug;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_author::SqliteAuthorRepository;
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_comment::{SqliteCommentRepository, SqliteNestedCommentRepository};
pub use sqlite_image::SqliteImageRepository;
pub use sqlite_slug::SqliteSlugRegistry;
pub use sqlite_user::SqliteUserRepository;

use crate::application::services::Repositories;
use sqlx::SqlitePool;
use std::{collections::HashMap, sync::Arc};

/// SQLite-backed repository set sharing one pool.
pub fn sqlite_repositories(pool: &SqlitePool) -> Repositories {
    Repositories {
        users: Arc::new(SqliteUserRepository::new(pool.clone())),
        authors: Arc::new(SqliteAuthorRepository::new(pool.clone())),
        categories: Arc::new(SqliteCategoryRepository::new(pool.clone())),
        article_write: Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
        article_read: Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        comments: Arc::new(SqliteCommentRepository::new(pool.clone())),
        replies: Arc::new(SqliteNestedCommentRepository::new(pool.clone())),
        images: Arc::new(SqliteImageRepository::new(pool.clone())),
        slugs: Arc::new(SqliteSlugRegistry::new(pool.clone())),
    }
}

/// Group `(owner id, value)` pairs by owner, keeping row order.
pub(crate) fn group_by_owner<V>(rows: Vec<(i64, V)>) -> HashMap<i64, Vec<V>> {
    let mut grouped: HashMap<i64, Vec<V>> = HashMap::new();
    for (owner, value) in rows {
        grouped.entry(owner).or_default().push(value);
    }
    grouped
}
