use std::sync::Arc;

use crate::application::{
    lifecycle::EntityLifecycle,
    ports::{security::PasswordHasher, time::Clock},
};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) lifecycle: Arc<EntityLifecycle>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        lifecycle: Arc<EntityLifecycle>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            lifecycle,
            clock,
        }
    }
}
