//! # Application Configuration
//!
//! Loaded once at startup, read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FRUIT_*`)
//! 2. Config file (`fruit-ledger.toml` in the working directory, optional)
//! 3. Defaults (this file)
//!
//! With nothing set, the program reads `allowed-fruits.txt` and `fruits.csv`
//! from the working directory and logs warnings only.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use fruit_store::{StoreConfig, DEFAULT_ALLOWED_FRUITS_FILE, DEFAULT_LEDGER_FILE};
use serde::Deserialize;

/// Config file looked up in the working directory (any supported extension).
pub const CONFIG_FILE_STEM: &str = "fruit-ledger";

/// Prefix of environment overrides, e.g. `FRUIT_LEDGER_PATH`.
pub const ENV_PREFIX: &str = "FRUIT";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Allow-list file (`FRUIT_ALLOWED_FRUITS_PATH`).
    pub allowed_fruits_path: PathBuf,

    /// Ledger file (`FRUIT_LEDGER_PATH`).
    pub ledger_path: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset (`FRUIT_LOG_FILTER`).
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            allowed_fruits_path: PathBuf::from(DEFAULT_ALLOWED_FRUITS_FILE),
            ledger_path: PathBuf::from(DEFAULT_LEDGER_FILE),
            log_filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `fruit-ledger.*` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        AppConfig::load_from(Path::new(CONFIG_FILE_STEM))
    }

    /// Loads configuration from a specific file (which may be absent) and
    /// the environment.
    pub fn load_from(file: &Path) -> Result<Self, ConfigError> {
        AppConfig::load_layered(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_layered(file: &Path, env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(file).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// File locations for the store.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.allowed_fruits_path, &self.ledger_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;
    use std::fs;

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(vars))
    }

    #[test]
    fn test_defaults_match_store_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.store_config(), StoreConfig::default());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.allowed_fruits_path, AppConfig::default().allowed_fruits_path);
    }

    #[test]
    fn test_file_overrides_some_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fruit-ledger.toml");
        fs::write(&path, "ledger_path = \"data/prices.csv\"\nlog_filter = \"debug\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ledger_path, PathBuf::from("data/prices.csv"));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.allowed_fruits_path, PathBuf::from("allowed-fruits.txt"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fruit-ledger.toml");
        fs::write(&path, "ledger_path = [unterminated\n").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_env_overrides_file_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fruit-ledger.toml");
        fs::write(&path, "ledger_path = \"data/prices.csv\"\n").unwrap();

        let env = env_with(&[
            ("FRUIT_LEDGER_PATH", "/var/lib/fruit/ledger.csv"),
            ("FRUIT_ALLOWED_FRUITS_PATH", "/etc/fruit/allowed.txt"),
        ]);
        let config = AppConfig::load_layered(&path, env).unwrap();

        assert_eq!(config.ledger_path, PathBuf::from("/var/lib/fruit/ledger.csv"));
        assert_eq!(config.allowed_fruits_path, PathBuf::from("/etc/fruit/allowed.txt"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_ignores_other_prefixes() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_with(&[("OTHER_LEDGER_PATH", "elsewhere.csv")]);

        let config = AppConfig::load_layered(&dir.path().join("absent.toml"), env).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
