// src/config.rs
use std::{
    env,
    net::SocketAddr,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: SocketAddr,
    media_root: PathBuf,
    media_url: String,
    allowed_origins: Vec<String>,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://blogsmith.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const fn default_max_connections() -> u32 {
    8
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got `{other}`"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got `{raw}`"
                    ))
                })?,
            None => default_max_connections(),
        };

        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let listen_addr = raw_addr.trim().parse::<SocketAddr>().map_err(|err| {
            ConfigError::Invalid(format!("LISTEN_ADDR `{raw_addr}` is not a socket address: {err}"))
        })?;

        let media_root = PathBuf::from(lookup("MEDIA_ROOT").unwrap_or_else(|| "./media".into()));

        let media_url = lookup("MEDIA_URL").unwrap_or_else(|| "/media/".into());
        if media_url.trim().is_empty() {
            return Err(ConfigError::Invalid("MEDIA_URL must not be empty".into()));
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let rate_limit_enabled = lookup("RATE_LIMIT_ENABLED")
            .map(|raw| parse_bool("RATE_LIMIT_ENABLED", &raw))
            .transpose()?
            .unwrap_or(true);

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            media_root,
            media_url,
            allowed_origins,
            rate_limit_enabled,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url(), "sqlite://blogsmith.db?mode=rwc");
        assert_eq!(config.database_max_connections(), 8);
        assert_eq!(config.listen_addr().port(), 8080);
        assert_eq!(config.media_url(), "/media/");
        assert_eq!(config.allowed_origins(), ["http://localhost:3000".to_string()]);
        assert!(config.rate_limit_enabled());
    }

    #[test]
    fn rejects_bad_listen_addr() {
        let err = config_from(&[("LISTEN_ADDR", "nowhere")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_connections() {
        assert!(config_from(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
    }

    #[test]
    fn parses_rate_limit_flag_and_origins() {
        let config = config_from(&[
            ("RATE_LIMIT_ENABLED", "false"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
        ])
        .unwrap();
        assert!(!config.rate_limit_enabled());
        assert_eq!(config.allowed_origins().len(), 2);
        assert!(config_from(&[("RATE_LIMIT_ENABLED", "maybe")]).is_err());
    }
}
