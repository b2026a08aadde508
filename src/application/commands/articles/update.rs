use super::ArticleCommandService;
use crate::{
    application::{
        commands::capability::{ensure_can_modify, ensure_capability},
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleContent, ArticleTitle, ArticleUpdate},
};

/// Partial update addressed by slug. The slug itself never changes.
pub struct UpdateArticleCommand {
    pub slug: String,
    pub content: Option<String>,
    pub title: Option<String>,
    pub categories: Option<Vec<String>>,
    pub featured: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.load_by_slug(&command.slug).await?;
        ensure_can_modify(actor, "articles", "update", article.author_id)?;

        let UpdateArticleCommand {
            slug: _,
            content,
            title,
            categories,
            featured,
        } = command;

        let mut update = ArticleUpdate::new(article.id, self.clock.now());
        if let Some(content) = content {
            update = update.with_content(ArticleContent::new(content)?);
        }
        if let Some(title) = title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(categories) = categories {
            update = update.with_categories(self.resolve_categories(categories).await?);
        }
        if let Some(featured) = featured {
            if featured != article.featured {
                ensure_capability(actor, "articles", "feature")?;
            }
            update = update.with_featured(featured);
        }

        if update.is_empty() {
            return Ok(article.into());
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
