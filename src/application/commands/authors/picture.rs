use uuid::Uuid;

use super::AuthorCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, AuthorProfileDto},
        error::ApplicationResult,
        ports::storage::UploadedFile,
    },
    domain::author::AuthorProfileUpdate,
};

pub struct ReplacePictureCommand {
    pub username: String,
    pub file: UploadedFile,
}

impl AuthorCommandService {
    /// Store the new picture, then drop the previous one unless it was the
    /// shared default.
    pub async fn replace_picture(
        &self,
        actor: &AuthenticatedUser,
        command: ReplacePictureCommand,
    ) -> ApplicationResult<AuthorProfileDto> {
        let (user, profile) = self.load_for(actor, &command.username, "update").await?;

        let key = format!(
            "author/{}.{}",
            Uuid::new_v4().simple(),
            command.file.extension()
        );
        self.storage.save(&key, command.file.contents).await?;

        let update = AuthorProfileUpdate::new(profile.id).with_picture(Some(key.clone()));
        let updated = match self.author_repo.update(update).await {
            Ok(updated) => updated,
            Err(err) => {
                self.lifecycle.discard_file(&key).await;
                return Err(err.into());
            }
        };

        if let Some(previous) = profile.owned_picture() {
            self.lifecycle.discard_file(previous).await;
        }

        Ok(AuthorProfileDto::from_profile(
            user.username,
            updated,
            self.storage.as_ref(),
        ))
    }
}
