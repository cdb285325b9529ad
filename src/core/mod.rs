//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - CLI handling and configuration
//! - Error types
//! - Running a conversion

pub mod cli;
pub mod config;
pub mod errors;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config::{ConfigFile, ConvertOptions};
pub use errors::{ConvertError, DecodeError};
pub use runner::run_app;
