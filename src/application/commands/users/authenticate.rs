use super::UserCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct AuthenticateCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// Check a username/password pair and resolve the caller's capabilities.
    pub async fn authenticate(
        &self,
        command: AuthenticateCommand,
    ) -> ApplicationResult<AuthenticatedUser> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        Ok(AuthenticatedUser::from(&user))
    }
}
