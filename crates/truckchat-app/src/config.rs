//! Configuration management for truck-chat
//!
//! Config stored at: ~/.config/truck-chat/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use truckchat_domain::conversation::ControllerOptions;
use truckchat_types::{ConfigError, IdentityMode, OutputFormat, Result};

use crate::layout::DataLayout;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name the chatbot introduces itself with
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// Data directory override
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// single or manufacturer_model
    #[serde(default)]
    pub identity_mode: IdentityMode,

    /// Ask for data-use consent before anything else
    #[serde(default)]
    pub consent_gate: bool,

    /// Ask for the year of manufacture. Defaults by identity mode when unset.
    #[serde(default)]
    pub collect_year: Option<bool>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_bot_name() -> String {
    "Sarah".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            data_dir: None,
            identity_mode: IdentityMode::default(),
            consent_gate: false,
            collect_year: None,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("truck-chat");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("truck-chat");
        Ok(data_dir)
    }

    pub fn layout(&self) -> Result<DataLayout> {
        Ok(DataLayout::new(self.data_dir()?, self.identity_mode))
    }

    pub fn controller_options(&self) -> ControllerOptions {
        let mut options = ControllerOptions::new(self.identity_mode)
            .with_bot_name(self.bot_name.clone())
            .with_consent_gate(self.consent_gate);
        if let Some(collect_year) = self.collect_year {
            options = options.with_collect_year(collect_year);
        }
        options
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let options = self.controller_options();

        writeln!(f, "Truck Chat Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Bot name:       {}", self.bot_name)?;
        writeln!(f, "Identity mode:  {}", self.identity_mode)?;
        writeln!(f, "Consent gate:   {}", self.consent_gate)?;
        writeln!(f, "Ask year:       {}", options.collect_year)?;
        writeln!(
            f,
            "Data dir:       {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bot_name, "Sarah");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            bot_name: "Rita".to_string(),
            data_dir: Some(dir.path().join("data")),
            identity_mode: IdentityMode::ManufacturerModel,
            consent_gate: true,
            collect_year: Some(true),
            output_format: OutputFormat::Json,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"identity_mode": "manufacturer_model"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.identity_mode, IdentityMode::ManufacturerModel);
        assert_eq!(config.bot_name, "Sarah");
        assert!(!config.consent_gate);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(truckchat_types::Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_controller_options() {
        let mut config = Config {
            identity_mode: IdentityMode::ManufacturerModel,
            consent_gate: true,
            ..Config::default()
        };
        let options = config.controller_options();
        assert!(options.with_consent_gate);
        assert!(!options.collect_year);

        config.collect_year = Some(true);
        assert!(config.controller_options().collect_year);
    }
}
