use crate::application::{dto::auth::AuthenticatedUser, dto::links, ports::FileStoragePort};
use crate::domain::author::AuthorProfile;
use crate::domain::user::{Capability, Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CapabilityView {
    pub resource: String,
    pub action: String,
}

impl From<Capability> for CapabilityView {
    fn from(value: Capability) -> Self {
        Self {
            resource: value.resource,
            action: value.action,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorProfileDto {
    pub username: String,
    pub picture_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuthorProfileDto {
    pub fn from_profile(
        username: impl Into<String>,
        profile: AuthorProfile,
        storage: &FileStoragePort,
    ) -> Self {
        Self {
            username: username.into(),
            picture_url: links::media_url(storage, profile.picture.as_deref()),
            bio: profile.bio.map(|bio| bio.into_inner()),
            created_at: profile.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WhoAmIDto {
    pub user: UserDto,
    pub author: Option<AuthorProfileDto>,
    pub capabilities: Vec<CapabilityView>,
}

impl WhoAmIDto {
    pub fn from_parts(
        user: User,
        author: Option<AuthorProfileDto>,
        auth: &AuthenticatedUser,
    ) -> Self {
        let mut capabilities: Vec<_> = auth
            .capabilities
            .iter()
            .cloned()
            .map(CapabilityView::from)
            .collect();
        capabilities.sort_by(|a, b| {
            a.resource
                .cmp(&b.resource)
                .then_with(|| a.action.cmp(&b.action))
        });

        Self {
            user: user.into(),
            author,
            capabilities,
        }
    }
}
