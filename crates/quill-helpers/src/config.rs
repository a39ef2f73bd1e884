//! Configuration for the helper library.
//!
//! The host embeds this library, so configuration arrives as a TOML fragment
//! of the host's own config file rather than from a file this crate owns.
//! Only the spam checker is configurable; everything else reads ambient
//! request state through the injected seams.
//!
//! ## Example
//!
//! ```toml
//! [spam]
//! enabled = true
//! api_key = "abc123"
//! timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::Result;

/// Environment variable overriding the configured spam API key.
pub const SPAM_API_KEY_ENV: &str = "QUILL_SPAM_API_KEY";

/// Default spam endpoint template; `{key}` is replaced with the API key.
pub const DEFAULT_SPAM_ENDPOINT: &str = "https://{key}.rest.akismet.com";

/// Top-level configuration for the helper library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spam-detection integration settings.
    pub spam: SpamConfig,
}

impl Config {
    /// Parse configuration from a TOML fragment, then apply environment
    /// overrides.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(SPAM_API_KEY_ENV) {
            if !key.is_empty() {
                self.spam.api_key = Some(key);
            }
        }
    }
}

/// Settings for the spam-detection integration.
///
/// The integration is inactive by default; with `enabled = false` or no API
/// key, the checker classifies everything as clean without network I/O.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpamConfig {
    /// Whether the integration is active at all.
    pub enabled: bool,
    /// API key for the spam service; absence deactivates the integration.
    pub api_key: Option<String>,
    /// Base URL of the spam service. A `{key}` placeholder is replaced with
    /// the API key when building request URLs.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SpamConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            endpoint: DEFAULT_SPAM_ENDPOINT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl SpamConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_inactive() {
        let config = Config::default();
        assert!(!config.spam.enabled);
        assert!(config.spam.api_key.is_none());
        assert_eq!(config.spam.endpoint, DEFAULT_SPAM_ENDPOINT);
        assert_eq!(config.spam.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml("[spam]\nenabled = true\n").unwrap();
        assert!(config.spam.enabled);
        assert_eq!(config.spam.endpoint, DEFAULT_SPAM_ENDPOINT);
    }

    #[test]
    fn test_full_toml_round_trip() {
        let config = Config::from_toml(
            "[spam]\nenabled = true\napi_key = \"abc123\"\nendpoint = \"https://spam.example.com\"\ntimeout_secs = 3\n",
        )
        .unwrap();
        assert_eq!(config.spam.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.spam.endpoint, "https://spam.example.com");
        assert_eq!(config.spam.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = Config::from_toml("spam = 12").unwrap_err();
        assert_eq!(err.category(), "config");
    }
}
