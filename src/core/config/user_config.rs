//! User configuration file handling
//!
//! Manages settings from ~/.config/nfnt2bdf/settings.json

use crate::core::config::settings::{APP_NAME, SETTINGS_FILE_NAME};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/nfnt2bdf/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Directory to write BDF files into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Suppress progress reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,
    /// Also write logs to the logs directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_to_file: Option<bool>,
}

impl ConfigFile {
    /// Get the path to the nfnt2bdf config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join(APP_NAME)
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(SETTINGS_FILE_NAME)
    }

    /// Read settings from a specific file without logging anything.
    ///
    /// A missing file is `Ok(None)`; an unreadable or invalid one is an error.
    pub fn read_from(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {SETTINGS_FILE_NAME}"))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {SETTINGS_FILE_NAME}"))?;
        Ok(Some(config))
    }

    /// Log the outcome of [`ConfigFile::read_from`] and keep the settings.
    ///
    /// A bad file logs a warning and yields `None`, so defaults apply. Call
    /// this once the subscriber is installed or the warning is lost.
    pub fn report(path: &Path, loaded: anyhow::Result<Option<Self>>) -> Option<Self> {
        match loaded {
            Ok(Some(config)) => {
                debug!("Loaded user settings from {:?}", path);
                Some(config)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        }
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/nfnt2bdf directory
    /// 2. A settings.json file with default values, unless one exists
    /// 3. A logs/ directory for application logs
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        Self::initialize_in(&Self::config_dir())
    }

    fn initialize_in(config_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join(SETTINGS_FILE_NAME);
        if !settings_path.exists() {
            let example = ConfigFile {
                output_dir: Some(PathBuf::from(".")),
                quiet: Some(false),
                log_to_file: Some(false),
            };
            example.save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE_NAME);
        let config = ConfigFile {
            output_dir: Some(PathBuf::from("/tmp/fonts")),
            quiet: Some(true),
            log_to_file: None,
        };

        config.save_to(&path).unwrap();
        assert_eq!(ConfigFile::read_from(&path).unwrap(), Some(config));
    }

    #[test]
    fn test_missing_file_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");
        assert_eq!(ConfigFile::read_from(&path).unwrap(), None);
        assert_eq!(ConfigFile::report(&path, Ok(None)), None);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        assert!(ConfigFile::read_from(&path).is_err());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_invalid_file_is_reported_as_warning() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let loaded = ConfigFile::read_from(&path);
        assert!(loaded.is_err());

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let config = tracing::subscriber::with_default(subscriber, || {
            ConfigFile::report(&path, loaded)
        });

        assert_eq!(config, None);
        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("WARN"), "no warning in: {text}");
        assert!(text.contains("Failed to parse settings.json"), "got: {text}");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "quiet": true }"#).unwrap();

        let config = ConfigFile::read_from(&path).unwrap().unwrap();
        assert_eq!(config.quiet, Some(true));
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_initialize_keeps_existing_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "quiet": true }"#).unwrap();

        ConfigFile::initialize_in(dir.path()).unwrap();

        assert!(dir.path().join("logs").is_dir());
        assert_eq!(ConfigFile::read_from(&path).unwrap().unwrap().quiet, Some(true));
    }
}
