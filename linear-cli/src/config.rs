// ABOUTME: Configuration file loading, validation, and hierarchical merging for Linear CLI
// ABOUTME: Supports TOML config files with XDG Base Directory specification compliance

use anyhow::{Context, Result, anyhow};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_KEY_ENV: &str = "LINEAR_API_KEY";
pub const API_URL_ENV: &str = "LINEAR_API_URL";

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub default_team: Option<String>,
    #[serde(default, deserialize_with = "validate_format")]
    pub preferred_format: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        let config = Self::load_from_paths(&paths)?;
        Ok(config.with_env_overrides(std::env::var(API_URL_ENV).ok()))
    }

    /// Load configuration from file paths in order of precedence (highest first).
    ///
    /// Missing files are skipped; a file that exists but does not parse is an error.
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                continue;
            }
            log::debug!("Loading config from {}", path.display());
            // Files earlier in the list keep their values
            config = Self::load_from_file(path)?.merge(config);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get standard config file paths in order of precedence (highest first)
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Project-specific config (highest precedence)
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join("linear-cli.toml"));
        }

        // 2. XDG config home
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            paths.push(
                PathBuf::from(config_home)
                    .join("linear-cli")
                    .join("config.toml"),
            );
        }

        // 3. User config directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(
                home_dir
                    .join(".config")
                    .join("linear-cli")
                    .join("config.toml"),
            );
        }

        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            api_url: other.api_url.or(self.api_url),
            default_team: other.default_team.or(self.default_team),
            preferred_format: other.preferred_format.or(self.preferred_format),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Apply `LINEAR_API_URL`, which wins over any file value when non-empty
    pub fn with_env_overrides(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api_url = Some(url);
        }
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            return Err(anyhow!("timeout_secs must be greater than zero"));
        }
        if self.api_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            return Err(anyhow!("api_url must not be empty"));
        }

        Ok(())
    }

    pub fn prefers_json(&self) -> bool {
        self.preferred_format.as_deref() == Some("json")
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Read the API key from `LINEAR_API_KEY`.
pub fn api_key() -> Result<SecretString> {
    api_key_from(std::env::var(API_KEY_ENV).ok())
}

pub fn api_key_from(value: Option<String>) -> Result<SecretString> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(SecretString::new(key.into_boxed_str())),
        _ => Err(anyhow!(
            "No API key configured. Set {API_KEY_ENV} environment variable"
        )),
    }
}

// Custom deserializer for format validation
fn validate_format<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value: Option<String> = Option::deserialize(deserializer)?;

    match value.as_deref() {
        None | Some("table") | Some("json") => Ok(value),
        Some(format) => Err(D::Error::custom(format!(
            "Invalid format '{format}'. Must be one of: table, json"
        ))),
    }
}
