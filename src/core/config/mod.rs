//! Application configuration management
//!
//! This module handles all configuration aspects:
//! - Conversion options passed to the BDF writer
//! - User configuration files

pub mod settings;
pub mod user_config;

pub use settings::{ConvertOptions, APP_NAME, SETTINGS_FILE_NAME};
pub use user_config::ConfigFile;
