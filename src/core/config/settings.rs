//! Conversion settings
//!
//! Built-in defaults and the option set handed to the BDF writer.

use std::path::PathBuf;

/// Name used for the config directory and log files
pub const APP_NAME: &str = "nfnt2bdf";

/// File name of the user settings inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Options controlling how a font resource is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Don't print the "Dumping N glyphs" line
    pub suppress_progress_report: bool,
    /// Compute everything and report the destination, but create no file
    pub dry_run: bool,
    /// Directory that receives the BDF files
    pub output_dir: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            suppress_progress_report: false,
            dry_run: false,
            output_dir: PathBuf::from("."),
        }
    }
}
