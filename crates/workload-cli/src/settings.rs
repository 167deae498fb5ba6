//! Layered runtime configuration
//!
//! Precedence, lowest first: built-in defaults, the optional config file,
//! `WORKLOAD__*` environment variables, then `GROQ_API_KEY` for the
//! assistant key. Command-line flags are applied on top by the caller.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use workload_assistant::config::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use workload_assistant::AssistantConfig;

pub const ENV_PREFIX: &str = "WORKLOAD";
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub assistant: AssistantConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// `development`, `production` or `test`
    pub profile: String,
}

impl Settings {
    /// Load from `config_file` (extension optional, file optional) and the
    /// process environment
    pub fn load(config_file: &str) -> Result<Self, ConfigError> {
        Self::from_sources(config_file, std::env::var(API_KEY_VAR).ok())
    }

    pub fn from_sources(config_file: &str, api_key: Option<String>) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database.path", "workload.db")?
            .set_default("assistant.base_url", DEFAULT_BASE_URL)?
            .set_default("assistant.model", DEFAULT_MODEL)?
            .set_default("assistant.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("logging.profile", "development")?
            .add_source(File::with_name(config_file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_override_option("assistant.api_key", api_key)?
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn missing_file(temp_dir: &TempDir) -> String {
        temp_dir.path().join("absent").to_string_lossy().into_owned()
    }

    #[test]
    fn test_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();

        let settings = Settings::from_sources(&missing_file(&temp_dir), None).unwrap();

        assert_eq!(settings.database.path, PathBuf::from("workload.db"));
        assert_eq!(settings.assistant.model, DEFAULT_MODEL);
        assert_eq!(settings.assistant.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(settings.assistant.api_key().is_none());
        assert!(settings.assistant.temperature.is_none());
        assert_eq!(settings.logging.profile, "development");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("workload.toml"),
            "[database]\npath = \"orders.db\"\n\n[assistant]\ntimeout_secs = 5\ntemperature = 0.25\n",
        )
        .unwrap();
        let name = temp_dir.path().join("workload");

        let settings = Settings::from_sources(name.to_str().unwrap(), None).unwrap();

        assert_eq!(settings.database.path, PathBuf::from("orders.db"));
        assert_eq!(settings.assistant.timeout_secs, 5);
        assert_eq!(settings.assistant.temperature, Some(0.25));
        assert_eq!(settings.assistant.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_api_key_override() {
        let temp_dir = TempDir::new().unwrap();

        let settings =
            Settings::from_sources(&missing_file(&temp_dir), Some("gsk_test".to_string()))
                .unwrap();

        let key = settings.assistant.api_key().unwrap();
        assert_eq!(key.expose(), "gsk_test");
        assert_eq!(format!("{:?}", key), "***REDACTED***");
    }
}
