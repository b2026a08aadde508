// tests/support/builders.rs
use serde_json::{Value, json};

/// JSON body for `POST /api/v1/articles`.
pub struct ArticlePayload {
    content: String,
    title: Option<String>,
    categories: Vec<String>,
    slug: Option<String>,
    featured: bool,
}

impl ArticlePayload {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            title: None,
            categories: Vec::new(),
            slug: None,
            featured: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, slug: impl Into<String>) -> Self {
        self.categories.push(slug.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn build(self) -> Value {
        let mut body = json!({
            "content": self.content,
            "categories": self.categories,
            "featured": self.featured,
        });
        if let Some(title) = self.title {
            body["title"] = Value::String(title);
        }
        if let Some(slug) = self.slug {
            body["slug"] = Value::String(slug);
        }
        body
    }
}
