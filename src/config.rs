//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use crate::Result;
use crate::agent::AgentProfile;
use crate::error::Error;
use crate::photos::nasa_base_url;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Agent registration handed to the host
    #[serde(default)]
    pub agent: AgentProfile,

    /// Photo search settings
    #[serde(default)]
    pub photos: PhotosConfig,
}

/// Photo search limits and data source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotosConfig {
    /// Longest accepted search term, in characters
    #[serde(default = "default_max_term_chars")]
    pub max_term_chars: usize,

    /// Maximum records per result
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Outbound query timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub source: SourceConfig,
}

/// Which backend answers lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    /// NASA Image and Video Library
    Nasa {
        #[serde(default = "nasa_base_url")]
        base_url: String,
    },

    /// JSON catalog on disk
    Local {
        #[serde(default = "default_catalog")]
        catalog: PathBuf,
    },
}

impl PhotosConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject limits that would make every search fail or come back empty
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("max_term_chars", self.max_term_chars as u64),
            ("max_results", self.max_results as u64),
            ("timeout_secs", self.timeout_secs),
        ] {
            if value == 0 {
                return Err(Error::Config(format!("photos.{} must be greater than zero", field)));
            }
        }
        Ok(())
    }
}

fn default_max_term_chars() -> usize {
    256
}

fn default_max_results() -> usize {
    20
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_catalog() -> PathBuf {
    config_dir().join("photos.json")
}

impl Default for PhotosConfig {
    fn default() -> Self {
        Self {
            max_term_chars: default_max_term_chars(),
            max_results: default_max_results(),
            timeout_secs: default_timeout_secs(),
            source: SourceConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Nasa { base_url: nasa_base_url() }
    }
}

/// Get the config directory path
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".meteor")
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Load configuration from file
pub fn load() -> Result<Config> {
    let path = config_path();

    if !path.exists() {
        return Err(Error::Config(format!(
            "Config not found at {:?}. Run 'meteor init' first.",
            path
        )));
    }

    let content = std::fs::read_to_string(&path)?;
    let config: Config = serde_json::from_str(&content)?;
    config.photos.validate()?;
    Ok(config)
}

/// Load configuration, falling back to defaults when no file exists yet
pub fn load_or_default() -> Result<Config> {
    if config_path().exists() {
        load()
    } else {
        tracing::debug!("No config at {:?}, using defaults", config_path());
        Ok(Config::default())
    }
}

/// Save configuration to file
pub fn save(config: &Config) -> Result<()> {
    let path = config_path();

    // Create parent directory
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, content)?;
    Ok(())
}

/// Initialize configuration interactively
pub fn onboard() -> Result<()> {
    use crate::ui;
    use inquire::{Select, Text, CustomType};

    ui::print_meteor_header("Setup", "");
    println!("  Let's choose where Meteor finds its photos.\n");

    let mut config = Config::default();

    // 1. Select data source
    ui::print_step("Step 1 of 3: photo data source");
    let sources = vec!["NASA Image Library (online)", "Local catalog (JSON file)"];
    let choice = Select::new("Photo data source:", sources).prompt()
        .map_err(|e| Error::Config(format!("Prompt failed: {}", e)))?;

    if choice.starts_with("Local") {
        let default = default_catalog();
        let path = Text::new("Catalog path:")
            .with_default(&default.to_string_lossy())
            .prompt()
            .map_err(|e| Error::Config(format!("Prompt failed: {}", e)))?;
        config.photos.source = SourceConfig::Local { catalog: PathBuf::from(path) };
    }

    // 2. Limits
    ui::print_step("Step 2 of 3: lookup timeout");
    config.photos.timeout_secs = CustomType::<u64>::new("Lookup timeout (seconds):")
        .with_default(default_timeout_secs())
        .prompt()
        .map_err(|e| Error::Config(format!("Prompt failed: {}", e)))?;

    // 3. Save
    ui::print_step("Step 3 of 3: save");
    config.photos.validate()?;
    ui::print_thinking("Saving configuration");
    save(&config)?;

    ui::print_success(&format!("Configuration written to {:?}", config_path()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.agent.name, "Meteor");
        assert_eq!(config.agent.model, "gemini-2.5-flash");
        assert_eq!(config.photos.max_term_chars, 256);
        assert_eq!(config.photos.max_results, 20);
        assert_eq!(config.photos.timeout(), Duration::from_secs(5));
        assert_eq!(config.photos.source, SourceConfig::Nasa { base_url: nasa_base_url() });
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.agent.model, config.agent.model);
        assert_eq!(parsed.photos.source, config.photos.source);
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        assert!(PhotosConfig::default().validate().is_ok());

        for json in [
            r#"{"max_results": 0}"#,
            r#"{"max_term_chars": 0}"#,
            r#"{"timeout_secs": 0}"#,
        ] {
            let photos: PhotosConfig = serde_json::from_str(json).unwrap();
            let err = photos.validate().unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{}", json);
        }
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = serde_json::from_str(
            r#"{"photos": {"max_results": 5, "source": {"kind": "local", "catalog": "/tmp/photos.json"}}}"#,
        ).unwrap();

        assert_eq!(parsed.photos.max_results, 5);
        assert_eq!(parsed.photos.max_term_chars, 256);
        assert_eq!(parsed.photos.source, SourceConfig::Local { catalog: PathBuf::from("/tmp/photos.json") });
        assert_eq!(parsed.agent.name, "Meteor");
    }
}
