use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, PasswordHash, Role, User, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// The first account becomes the administrator; afterwards only actors
    /// holding `users:create` may register accounts.
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&username, &command.password)?;
        let existing = self.user_repo.count().await?;
        let role = Self::determine_role(existing, actor, command.role)?;

        if existing > 0 && self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let user = self
            .create_and_insert_user(username, &command.password, role)
            .await?;
        self.lifecycle.after_user_created(&user).await;
        tracing::info!(user_id = user.id.0, role = %user.role, "user registered");

        Ok(user.into())
    }

    fn determine_role(
        existing: u64,
        actor: Option<&AuthenticatedUser>,
        role: Option<Role>,
    ) -> ApplicationResult<Role> {
        if existing == 0 {
            return Ok(Role::Admin);
        }
        let requester = actor
            .ok_or_else(|| ApplicationError::unauthorized("authentication required"))?;
        ensure_capability(requester, "users", "create")?;
        Ok(role.unwrap_or_default())
    }

    async fn create_and_insert_user(
        &self,
        username: Username,
        password: &str,
        role: Role,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(username, password_hash, role, self.clock.now());
        Ok(self.user_repo.insert(new_user).await?)
    }
}
