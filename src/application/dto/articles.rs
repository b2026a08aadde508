use crate::application::{
    dto::{comments::CommentDto, images::ImageDto, links},
    ports::FileStoragePort,
};
use crate::domain::article::{Article, ArticleView};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Article as returned by write operations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub title: Option<String>,
    pub content: String,
    pub featured: bool,
    pub slug: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub detail_url: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let slug = article.slug.into_inner();
        Self {
            title: article.title.map(|title| title.into_inner()),
            content: article.content.into_inner(),
            featured: article.featured,
            detail_url: links::article_url(&slug),
            slug,
            author_id: article.author_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub title: Option<String>,
    pub content: String,
    pub featured: bool,
    pub author_name: String,
    pub author_image: Option<String>,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub categories: Vec<String>,
    /// Usernames of the users who liked the article.
    pub likes: Vec<String>,
    pub detail_url: String,
}

impl ArticleSummaryDto {
    pub fn from_view(view: ArticleView, storage: &FileStoragePort) -> Self {
        let ArticleView {
            article,
            author_name,
            author_picture,
            category_names,
            liker_names,
        } = view;
        let slug = article.slug.into_inner();
        Self {
            title: article.title.map(|title| title.into_inner()),
            content: article.content.into_inner(),
            featured: article.featured,
            author_name,
            author_image: links::media_url(storage, author_picture.as_deref()),
            detail_url: links::article_url(&slug),
            slug,
            created_at: article.created_at,
            updated_at: article.updated_at,
            categories: category_names,
            likes: liker_names,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    #[serde(flatten)]
    pub article: ArticleSummaryDto,
    /// Newest first, each with its replies.
    pub comments: Vec<CommentDto>,
    /// Newest first.
    pub images: Vec<ImageDto>,
    pub comment_url: String,
    pub add_image_url: String,
}

/// Result of toggling a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    Liked,
    Unliked,
}

impl LikeOutcome {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Liked => "Like is successful",
            Self::Unliked => "Unlike successful",
        }
    }
}
