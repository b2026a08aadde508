// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Author,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Author => "author",
        }
    }

    pub fn default_capabilities(self) -> HashSet<Capability> {
        use Capability as Cap;
        match self {
            Self::Admin => HashSet::from([
                Cap::new("articles", "create"),
                Cap::new("articles", "update:any"),
                Cap::new("articles", "delete:any"),
                Cap::new("articles", "feature"),
                Cap::new("articles", "like"),
                Cap::new("categories", "manage"),
                Cap::new("comments", "create"),
                Cap::new("comments", "update:any"),
                Cap::new("comments", "delete:any"),
                Cap::new("images", "create:any"),
                Cap::new("images", "update:any"),
                Cap::new("images", "delete:any"),
                Cap::new("authors", "update:any"),
                Cap::new("authors", "delete:any"),
                Cap::new("users", "create"),
            ]),
            Self::Author => HashSet::from([
                Cap::new("articles", "create"),
                Cap::new("articles", "update:own"),
                Cap::new("articles", "delete:own"),
                Cap::new("articles", "like"),
                Cap::new("comments", "create"),
                Cap::new("comments", "update:own"),
                Cap::new("comments", "delete:own"),
                Cap::new("images", "create:own"),
                Cap::new("images", "update:own"),
                Cap::new("images", "delete:own"),
                Cap::new("authors", "update:own"),
                Cap::new("authors", "delete:own"),
            ]),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "author" => Ok(Self::Author),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if value.chars().count() < 3 {
            return Err(DomainError::Validation(
                "username must be at least 3 characters long".into(),
            ));
        }
        if value.contains(':') {
            return Err(DomainError::Validation(
                "username cannot contain ':'".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames_must_be_usable_in_basic_credentials() {
        assert!(Username::new("ab").is_err());
        assert!(Username::new("bad:name").is_err());
        assert_eq!(Username::new("writer").unwrap().as_str(), "writer");
    }

    #[test]
    fn authors_only_hold_ownership_scoped_write_capabilities() {
        let caps = Role::Author.default_capabilities();
        assert!(caps.contains(&Capability::new("articles", "update:own")));
        assert!(!caps.contains(&Capability::new("articles", "update:any")));
        assert!(!caps.contains(&Capability::new("categories", "manage")));
        assert!(!caps.contains(&Capability::new("articles", "feature")));
    }

    #[test]
    fn role_round_trips_through_its_name() {
        for role in [Role::Admin, Role::Author] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("editor".parse::<Role>().is_err());
    }
}
