use super::ArticleCommandService;
use crate::application::{
    commands::capability::ensure_capability,
    dto::{AuthenticatedUser, LikeOutcome},
    error::ApplicationResult,
};

pub struct ToggleLikeCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Like the article, or take the like back when the actor already liked it.
    pub async fn toggle_like(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleLikeCommand,
    ) -> ApplicationResult<LikeOutcome> {
        ensure_capability(actor, "articles", "like")?;
        let article = self.load_by_slug(&command.slug).await?;

        if self.write_repo.has_like(article.id, actor.id).await? {
            self.write_repo.remove_like(article.id, actor.id).await?;
            Ok(LikeOutcome::Unliked)
        } else {
            self.write_repo.add_like(article.id, actor.id).await?;
            Ok(LikeOutcome::Liked)
        }
    }
}
