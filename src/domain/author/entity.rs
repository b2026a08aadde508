// src/domain/author/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Storage key of the picture every new profile starts with. Shared between
/// profiles, so it is never deleted together with one of them.
pub const DEFAULT_PICTURE: &str = "default.png";

const MAX_BIO_LEN: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub i64);

impl AuthorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("author id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AuthorId> for i64 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorBio(String);

impl AuthorBio {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > MAX_BIO_LEN {
            return Err(DomainError::Validation(format!(
                "bio must be at most {MAX_BIO_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct AuthorProfile {
    pub id: AuthorId,
    pub user_id: UserId,
    pub picture: Option<String>,
    pub bio: Option<AuthorBio>,
    pub created_at: DateTime<Utc>,
}

impl AuthorProfile {
    /// Stored picture owned by this profile alone, if any.
    pub fn owned_picture(&self) -> Option<&str> {
        self.picture
            .as_deref()
            .filter(|picture| !picture.is_empty() && *picture != DEFAULT_PICTURE)
    }
}

#[derive(Debug, Clone)]
pub struct NewAuthorProfile {
    pub user_id: UserId,
    pub picture: Option<String>,
    pub bio: Option<AuthorBio>,
    pub created_at: DateTime<Utc>,
}

impl NewAuthorProfile {
    pub fn for_user(user_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            picture: Some(DEFAULT_PICTURE.to_string()),
            bio: None,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorProfileUpdate {
    pub id: AuthorId,
    pub bio: Option<Option<AuthorBio>>,
    pub picture: Option<Option<String>>,
}

impl AuthorProfileUpdate {
    pub const fn new(id: AuthorId) -> Self {
        Self {
            id,
            bio: None,
            picture: None,
        }
    }

    pub fn with_bio(mut self, bio: Option<AuthorBio>) -> Self {
        self.bio = Some(bio);
        self
    }

    pub fn with_picture(mut self, picture: Option<String>) -> Self {
        self.picture = Some(picture);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(picture: Option<&str>) -> AuthorProfile {
        AuthorProfile {
            id: AuthorId::new(1).unwrap(),
            user_id: UserId::new(1).unwrap(),
            picture: picture.map(str::to_string),
            bio: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn default_picture_is_not_owned() {
        assert_eq!(profile(Some(DEFAULT_PICTURE)).owned_picture(), None);
        assert_eq!(profile(None).owned_picture(), None);
        assert_eq!(
            profile(Some("author/abc.png")).owned_picture(),
            Some("author/abc.png")
        );
    }

    #[test]
    fn new_profiles_start_with_default_picture_and_no_bio() {
        let new = NewAuthorProfile::for_user(UserId::new(4).unwrap(), Utc::now());
        assert_eq!(new.picture.as_deref(), Some(DEFAULT_PICTURE));
        assert!(new.bio.is_none());
    }
}
