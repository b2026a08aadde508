use super::AuthorCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, AuthorProfileDto},
        error::ApplicationResult,
    },
    domain::author::{AuthorBio, AuthorProfileUpdate},
};

pub struct UpdateAuthorCommand {
    pub username: String,
    /// `Some(None)` clears the bio.
    pub bio: Option<Option<String>>,
}

impl AuthorCommandService {
    pub async fn update_author(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateAuthorCommand,
    ) -> ApplicationResult<AuthorProfileDto> {
        let (user, profile) = self.load_for(actor, &command.username, "update").await?;

        let mut update = AuthorProfileUpdate::new(profile.id);
        if let Some(bio) = command.bio {
            update = update.with_bio(bio.map(AuthorBio::new).transpose()?);
        }
        let updated = self.author_repo.update(update).await?;
        Ok(AuthorProfileDto::from_profile(
            user.username,
            updated,
            self.storage.as_ref(),
        ))
    }
}
