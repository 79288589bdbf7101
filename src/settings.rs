//! # Settings Module
//!
//! ## Purpose
//! Run-time settings of the kinetics library stored as a small JSON file: the log level and an
//! optional log file. A missing or unreadable file gives the defaults, so a fresh checkout
//! runs without any configuration.
//!
//! ## Usage Pattern
//! ```rust
//! use KiSurf::settings::KineticsSettings;
//!
//! let settings = KineticsSettings::with_config_file("kinetics_config.json");
//! settings.init_logger().unwrap();
//! ```
//!
//! ## File Format
//! | key | default | meaning |
//! |-----|---------|---------|
//! | "log_level" | "info" | off, error, warn, info, debug, trace |
//! | "log_file" | null | write the log to this file instead of the terminal |
use crate::errors::KineticsError;
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use simplelog::{Config, SimpleLogger, WriteLogger};
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KineticsSettings {
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Default for KineticsSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl KineticsSettings {
    /// Reads settings from a JSON file.
    ///
    /// # Returns
    /// * `Ok(KineticsSettings)` - parsed settings
    /// * `Err(KineticsError)` - the file can't be read or is not valid JSON
    pub fn load(config_file: &str) -> Result<Self, KineticsError> {
        let content = fs::read_to_string(config_file)?;
        let settings: KineticsSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Loads settings from `config_file`, or the defaults if it doesn't exist or can't be parsed.
    pub fn with_config_file(config_file: &str) -> Self {
        if !Path::new(config_file).exists() {
            return Self::default();
        }
        match Self::load(config_file) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("ignoring settings file '{}': {}", config_file, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, config_file: &str) -> Result<(), KineticsError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_file, content)?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, KineticsError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| KineticsError::UnsupportedLogLevel(self.log_level.clone()))
    }

    /// Installs a simplelog logger: on the terminal, or into `log_file` when it is set.
    /// A logger installed earlier in the process is kept.
    pub fn init_logger(&self) -> Result<(), KineticsError> {
        let level = self.level_filter()?;
        let installed = match &self.log_file {
            Some(path) => WriteLogger::init(level, Config::default(), fs::File::create(path)?),
            None => SimpleLogger::init(level, Config::default()),
        };
        if installed.is_err() {
            warn!("logger already initialized, keeping it");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = KineticsSettings::default();
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.log_file, None);
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_save_and_load() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let settings = KineticsSettings {
            log_level: "debug".to_string(),
            log_file: Some("kinetics.log".to_string()),
        };
        settings.save(path).unwrap();
        let loaded = KineticsSettings::load(path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_with_config_file_falls_back_to_defaults() {
        let missing = KineticsSettings::with_config_file("no_such_kinetics_config.json");
        assert_eq!(missing, KineticsSettings::default());

        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "{ not json").unwrap();
        let path = file.path().to_str().unwrap();
        assert!(matches!(KineticsSettings::load(path), Err(KineticsError::Serde(_))));
        assert_eq!(KineticsSettings::with_config_file(path), KineticsSettings::default());
    }

    #[test]
    fn test_unsupported_level() {
        let settings = KineticsSettings {
            log_level: "loud".to_string(),
            log_file: None,
        };
        assert!(matches!(
            settings.level_filter(),
            Err(KineticsError::UnsupportedLogLevel(level)) if level == "loud"
        ));
        assert!(settings.init_logger().is_err());
    }
}
