//! Configuration management for talentscout
//!
//! Configuration lives in `~/.talentscout/config.yaml` and can be overridden
//! per-value through `TALENTSCOUT_*` environment variables, so a fully
//! env-configured run never needs the file. Endpoint URLs are never
//! hard-coded in the binary.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Items per search result page, agreed with the backend.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Session token lifetime in hours.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the candidate search backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,

    /// Credential login endpoint URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,

    /// Secret used to sign session tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_secret: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Search results per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Session token lifetime in hours
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: i64,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_session_ttl_hours() -> i64 {
    DEFAULT_SESSION_TTL_HOURS
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            page_size: default_page_size(),
            session_ttl_hours: default_session_ttl_hours(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".talentscout").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path_override: Option<&str>) -> Result<PathBuf> {
        match path_override {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, applying environment overrides.
    ///
    /// A missing file is not an error: env vars alone can supply a complete
    /// configuration. Individual values resolve as env > file > default.
    pub fn load_at(path_override: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path_override)?;

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_yaml::from_str(&contents).map_err(ConfigError::from)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("TALENTSCOUT_BACKEND_URL") {
            if !url.is_empty() {
                self.backend_url = Some(url);
            }
        }
        if let Ok(url) = std::env::var("TALENTSCOUT_LOGIN_URL") {
            if !url.is_empty() {
                self.login_url = Some(url);
            }
        }
        if let Ok(secret) = std::env::var("TALENTSCOUT_SESSION_SECRET") {
            if !secret.is_empty() {
                self.session_secret = Some(secret);
            }
        }
    }

    /// Save configuration to the given path (or the default location)
    pub fn save_at(&self, path_override: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path_override)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The config file holds the signing secret
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Path of the session file, kept next to the config file
    pub fn session_path(path_override: Option<&str>) -> Result<PathBuf> {
        let config_path = Self::resolve_path(path_override)?;
        Ok(config_path.with_file_name("session.yaml"))
    }

    /// Backend base URL, or an actionable error
    pub fn require_backend_url(&self) -> Result<&str> {
        self.backend_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingBackendUrl.into())
    }

    /// Login endpoint URL, or an actionable error
    pub fn require_login_url(&self) -> Result<&str> {
        self.login_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingLoginUrl.into())
    }

    /// Session signing secret, or an actionable error
    pub fn require_session_secret(&self) -> Result<&str> {
        self.session_secret
            .as_deref()
            .ok_or_else(|| ConfigError::MissingSessionSecret.into())
    }
}
