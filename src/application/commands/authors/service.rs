use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_can_modify,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        lifecycle::EntityLifecycle,
        ports::FileStoragePort,
    },
    domain::{
        author::{AuthorProfile, AuthorRepository},
        user::{User, UserRepository, Username},
    },
};

pub struct AuthorCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) storage: Arc<FileStoragePort>,
    pub(super) lifecycle: Arc<EntityLifecycle>,
}

impl AuthorCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        storage: Arc<FileStoragePort>,
        lifecycle: Arc<EntityLifecycle>,
    ) -> Self {
        Self {
            user_repo,
            author_repo,
            storage,
            lifecycle,
        }
    }

    /// Load the profile of `username` and check `authors:<action>` against it.
    pub(super) async fn load_for(
        &self,
        actor: &AuthenticatedUser,
        username: &str,
        action: &str,
    ) -> ApplicationResult<(User, AuthorProfile)> {
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
        ensure_can_modify(actor, "authors", action, profile.user_id)?;
        Ok((user, profile))
    }
}
