// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::category::CategoryId;
use crate::domain::slug::{Slug, SlugKind, SlugSeed, Sluggable};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub author_id: UserId,
    pub title: Option<ArticleTitle>,
    pub content: ArticleContent,
    pub featured: bool,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Article joined with the names the API renders next to it.
#[derive(Debug, Clone)]
pub struct ArticleView {
    pub article: Article,
    pub author_name: String,
    pub author_picture: Option<String>,
    pub category_names: Vec<String>,
    pub liker_names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author_id: UserId,
    pub title: Option<ArticleTitle>,
    pub content: ArticleContent,
    pub featured: bool,
    pub category_ids: Vec<CategoryId>,
    pub slug: Option<Slug>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sluggable for NewArticle {
    fn slug_kind(&self) -> SlugKind {
        SlugKind::Article
    }

    fn slug_seed(&self) -> SlugSeed {
        SlugSeed::Text(self.content.as_str().to_string())
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

/// Partial update. The slug is deliberately absent: it never changes after
/// creation.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub featured: Option<bool>,
    pub category_ids: Option<Vec<CategoryId>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub const fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            featured: None,
            category_ids: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub const fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn with_categories(mut self, category_ids: Vec<CategoryId>) -> Self {
        self.category_ids = Some(category_ids);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.featured.is_none()
            && self.category_ids.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_article(content: &str) -> NewArticle {
        let now = Utc::now();
        NewArticle {
            author_id: UserId::new(1).unwrap(),
            title: None,
            content: ArticleContent::new(content).unwrap(),
            featured: false,
            category_ids: vec![],
            slug: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn slug_seed_is_the_content() {
        let article = new_article("Rust ownership explained");
        assert_eq!(
            article.slug_seed(),
            SlugSeed::Text("Rust ownership explained".into())
        );
        assert_eq!(article.slug_kind(), SlugKind::Article);
    }

    #[test]
    fn update_builder_tracks_emptiness() {
        let update = ArticleUpdate::new(ArticleId::new(1).unwrap(), Utc::now());
        assert!(update.is_empty());
        assert!(!update.with_featured(true).is_empty());
    }
}
