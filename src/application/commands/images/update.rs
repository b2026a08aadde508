use super::ImageCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ImageDto},
        error::ApplicationResult,
    },
    domain::image::ImageCaption,
};

pub struct UpdateImageCommand {
    pub slug: String,
    pub caption: String,
}

impl ImageCommandService {
    pub async fn update_image(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateImageCommand,
    ) -> ApplicationResult<ImageDto> {
        let image = self.load_for(actor, &command.slug, "update").await?;
        let caption = ImageCaption::new(command.caption)?;
        let updated = self.image_repo.update_caption(image.id, caption).await?;
        Ok(ImageDto::from_image(updated, self.storage.as_ref()))
    }
}
