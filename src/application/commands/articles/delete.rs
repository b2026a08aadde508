use super::ArticleCommandService;
use crate::application::{
    commands::capability::ensure_can_modify, dto::AuthenticatedUser, error::ApplicationResult,
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_by_slug(&command.slug).await?;
        ensure_can_modify(actor, "articles", "delete", article.author_id)?;

        self.lifecycle.before_article_deleted(&article).await;
        self.write_repo.delete(article.id).await?;
        tracing::info!(article_id = article.id.0, slug = %article.slug, "article deleted");
        Ok(())
    }
}
