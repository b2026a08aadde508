use super::AuthorCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteAuthorCommand {
    pub username: String,
}

impl AuthorCommandService {
    /// Removes the profile and its stored picture. The user account stays.
    pub async fn delete_author(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteAuthorCommand,
    ) -> ApplicationResult<()> {
        let (_, profile) = self.load_for(actor, &command.username, "delete").await?;
        self.lifecycle.before_author_deleted(&profile).await;
        self.author_repo.delete(profile.id).await?;
        tracing::info!(author_id = profile.id.0, "author profile deleted");
        Ok(())
    }
}
