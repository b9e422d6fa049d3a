//! # Application configuration: `appointments.toml`
//!
//! Deploy-time settings for the web client. The web package compiles its
//! `appointments.toml` in and then lets build-time environment variables
//! override individual values, so one artifact can be rebuilt per environment
//! without touching the file.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"   # origin of the scheduling REST API
//!
//! [auth]
//! google_client_id = ""                # empty disables Google sign-in
//! ```
//!
//! ## Overrides
//!
//! | Variable (read at compile time) | Field |
//! |---------------------------------|-------|
//! | `APPOINTMENTS_API_URL` | `api.base_url` |
//! | `APPOINTMENTS_GOOGLE_CLIENT_ID` | `auth.google_client_id` |
//!
//! All structs derive `Default` so a missing or empty file is equivalent to
//! the local development configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `appointments.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// REST API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin the `/api/...` paths are appended to. No trailing slash needed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Third-party sign-in settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// OAuth client id for Google Identity Services. Empty means disabled.
    #[serde(default)]
    pub google_client_id: String,
}

impl AppConfig {
    /// Create a config pointing at the given API origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            auth: AuthConfig::default(),
        }
    }

    /// Builder method to set the Google client id.
    pub fn with_google_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.auth.google_client_id = client_id.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "appointments.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply the compile-time environment overrides.
    pub fn with_build_env(self) -> Self {
        self.with_overrides(
            option_env!("APPOINTMENTS_API_URL"),
            option_env!("APPOINTMENTS_GOOGLE_CLIENT_ID"),
        )
    }

    fn with_overrides(mut self, base_url: Option<&str>, google_client_id: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        if let Some(id) = google_client_id.map(str::trim).filter(|i| !i.is_empty()) {
            self.auth.google_client_id = id.to_string();
        }
        self
    }

    /// API origin without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    pub fn google_client_id(&self) -> Option<&str> {
        let id = self.auth.google_client_id.trim();
        (!id.is_empty()).then_some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url(), "http://localhost:8080");
        assert!(config.google_client_id().is_none());
    }

    #[test]
    fn test_parse_full_file() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.example.rw/"

            [auth]
            google_client_id = "123.apps.googleusercontent.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url(), "https://api.example.rw");
        assert_eq!(
            config.google_client_id(),
            Some("123.apps.googleusercontent.com")
        );
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(
            AppConfig::from_toml("[api\nbase_url = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides_ignore_blank_values() {
        let config = AppConfig::new("http://a")
            .with_google_client_id("keep")
            .with_overrides(Some("  "), None);
        assert_eq!(config.api_base_url(), "http://a");
        assert_eq!(config.google_client_id(), Some("keep"));

        let config = config.with_overrides(Some("http://b"), Some("other"));
        assert_eq!(config.api_base_url(), "http://b");
        assert_eq!(config.google_client_id(), Some("other"));
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let config = AppConfig::new("https://api.example.rw").with_google_client_id("gid");
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
        assert_eq!(AppConfig::filename(), "appointments.toml");
    }
}
