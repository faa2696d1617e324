//! Configuration loading: embedded TOML with build-time environment overrides.
//!
//! The client has no filesystem or process environment at runtime, so
//! `billsight.toml` is compiled in and `BILLSIGHT_API_BASE` / `BILLSIGHT_LOG`
//! are read with `option_env!` when the crate is built. Every field has a
//! default so the file may be empty.

use billsight_app::session_store::StorageKeys;
use serde::Deserialize;

/// The embedded configuration file.
const EMBEDDED: &str = include_str!("../billsight.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Billing service settings.
    pub api: ApiConfig,
    /// Browser storage settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Billing service location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port the `/api/*` paths are appended to.
    pub base_url: String,
}

/// Keys of the persisted records in `localStorage`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub identity_key: String,
    pub result_key: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl ClientConfig {
    /// Load the embedded configuration, then apply build-time overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded TOML is malformed or the result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(EMBEDDED)?;
        config.apply_overrides(option_env!("BILLSIGHT_API_BASE"), option_env!("BILLSIGHT_LOG"));
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    fn apply_overrides(&mut self, api_base: Option<&str>, log: Option<&str>) {
        if let Some(val) = api_base {
            self.api.base_url = val.to_string();
        }
        if let Some(val) = log {
            self.logging.filter = val.to_string();
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if self.storage.identity_key == self.storage.result_key {
            return Err(ConfigError::Validation(
                "storage keys must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Storage keys for the session store.
    #[must_use]
    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            identity: self.storage.identity_key.clone(),
            result: self.storage.result_key.clone(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let keys = StorageKeys::default();
        Self {
            identity_key: keys.identity,
            result_key: keys.result,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.storage.identity_key, "loggedInUser");
        assert_eq!(config.storage.result_key, "resultData");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn should_parse_embedded_file() {
        let config = ClientConfig::from_toml(EMBEDDED).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage_keys(), StorageKeys::default());
    }

    #[test]
    fn should_default_to_filter_covering_every_crate() {
        let default = LoggingConfig::default();
        let embedded = ClientConfig::from_toml(EMBEDDED).unwrap().logging;
        assert_eq!(embedded, default);
        assert!(tracing_subscriber::EnvFilter::try_new(&default.filter).is_ok());
        assert!(!default.filter.contains('='));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [api]
            base_url = 'https://bills.example.com'

            [storage]
            identity_key = 'identity'
            result_key = 'result'

            [logging]
            filter = 'debug'
        ";
        let config = ClientConfig::from_toml(toml).unwrap();
        assert_eq!(config.api.base_url, "https://bills.example.com");
        assert_eq!(config.storage.identity_key, "identity");
        assert_eq!(config.storage.result_key, "result");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let config = ClientConfig::from_toml("[storage]\nresult_key = 'last'").unwrap();
        assert_eq!(config.storage.identity_key, "loggedInUser");
        assert_eq!(config.storage.result_key, "last");
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn should_apply_overrides() {
        let mut config = ClientConfig::default();
        config.apply_overrides(Some("http://10.0.0.2:8000"), Some("billsight_app=debug"));
        assert_eq!(config.api.base_url, "http://10.0.0.2:8000");
        assert_eq!(config.logging.filter, "billsight_app=debug");
    }

    #[test]
    fn should_keep_values_without_overrides() {
        let mut config = ClientConfig::default();
        config.apply_overrides(None, None);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn should_reject_empty_base_url() {
        let mut config = ClientConfig::default();
        config.api.base_url = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_identical_storage_keys() {
        let mut config = ClientConfig::default();
        config.storage.result_key = config.storage.identity_key.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        assert!(matches!(
            ClientConfig::from_toml("invalid {{{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
