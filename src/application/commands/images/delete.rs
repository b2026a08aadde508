use super::ImageCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteImageCommand {
    pub slug: String,
}

impl ImageCommandService {
    pub async fn delete_image(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteImageCommand,
    ) -> ApplicationResult<()> {
        let image = self.load_for(actor, &command.slug, "delete").await?;
        self.lifecycle.before_image_deleted(&image).await;
        self.image_repo.delete(image.id).await?;
        tracing::info!(slug = %image.slug, "image deleted");
        Ok(())
    }
}
