use super::ArticleCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleContent, ArticleTitle, NewArticle},
        slug::Slug,
    },
};

pub struct CreateArticleCommand {
    pub content: String,
    pub title: Option<String>,
    pub categories: Vec<String>,
    pub slug: Option<String>,
    pub featured: bool,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    content: Option<String>,
    title: Option<String>,
    categories: Vec<String>,
    slug: Option<String>,
    featured: bool,
}

impl CreateArticleCommandBuilder {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
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

    pub const fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            content: self.content.ok_or("content is required")?,
            title: self.title,
            categories: self.categories,
            slug: self.slug,
            featured: self.featured,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;
        if command.featured {
            ensure_capability(actor, "articles", "feature")?;
        }

        let content = ArticleContent::new(command.content)?;
        let title = command.title.map(ArticleTitle::new).transpose()?;
        let slug = command.slug.map(Slug::new).transpose()?;
        let category_ids = self.resolve_categories(command.categories).await?;
        let now = self.clock.now();

        let new_article = NewArticle {
            author_id: actor.id,
            title,
            content,
            featured: command.featured,
            category_ids,
            slug,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .slug_service
            .assign_and_insert(new_article, |article| self.write_repo.insert(article))
            .await?;
        tracing::info!(article_id = created.id.0, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
