use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, AuthorProfileDto, WhoAmIDto},
        error::{ApplicationError, ApplicationResult},
        ports::FileStoragePort,
    },
    domain::{
        author::AuthorRepository,
        user::{UserRepository, Username},
    },
};

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
    author_repo: Arc<dyn AuthorRepository>,
    storage: Arc<FileStoragePort>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        storage: Arc<FileStoragePort>,
    ) -> Self {
        Self {
            user_repo,
            author_repo,
            storage,
        }
    }

    pub async fn whoami(&self, actor: &AuthenticatedUser) -> ApplicationResult<WhoAmIDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        let author = self
            .author_repo
            .find_by_user_id(user.id)
            .await?
            .map(|profile| {
                AuthorProfileDto::from_profile(user.username.clone(), profile, self.storage.as_ref())
            });
        Ok(WhoAmIDto::from_parts(user, author, actor))
    }

    pub async fn get_author(&self, username: &str) -> ApplicationResult<AuthorProfileDto> {
        let username = Username::new(username)
            .map_err(|_| ApplicationError::not_found("author not found"))?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        let profile = self
            .author_repo
            .find_by_user_id(user.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        Ok(AuthorProfileDto::from_profile(
            user.username,
            profile,
            self.storage.as_ref(),
        ))
    }
}
