//! Command line interface for nfnt2bdf
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs. Many CLI options are documented with
//! examples to help users understand the expected format.

use crate::core::config::{ConfigFile, ConvertOptions};
use crate::font_source::style::StyleMask;
use crate::io::FontRequest;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// nfnt2bdf CLI arguments
///
/// Examples:
///   nfnt2bdf -f Geneva -s 12 geneva12.nfnt             # Write Geneva-12.bdf
///   nfnt2bdf -f Geneva -s 12 --style bold geneva12b.nfnt
///   nfnt2bdf -f "New York" -s 9 --style 0x03 ny9.font   # New-YorkBoldItalic-9.bdf
///   nfnt2bdf -n -f Geneva -s 12 geneva12.nfnt          # Only report what would be written
///   nfnt2bdf --info geneva12.nfnt                       # Print header and ink bounds as JSON
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "nfnt2bdf",
    version,
    about = "Convert Macintosh FONT/NFNT bitmap font resources to BDF",
    long_about = "nfnt2bdf reads a single FONT or NFNT resource body (already extracted from the resource fork) and writes its glyphs as an Adobe Bitmap Distribution Format file named after the font family, style and point size."
)]
pub struct CliArgs {
    /// Path to a raw FONT/NFNT resource
    #[clap(
        value_name = "RESOURCE",
        help = "Raw FONT/NFNT resource file",
        long_help = "Path to a file containing exactly one FONT or NFNT resource body, starting with the font header."
    )]
    pub resource: Option<PathBuf>,

    /// Font family name used for the FONT line and file name
    #[clap(
        long = "family",
        short = 'f',
        help = "Font family name",
        long_help = "Font family name. Whitespace is replaced by hyphens in the output name."
    )]
    pub family: Option<String>,

    /// Point size of the resource
    #[clap(long = "size", short = 's', help = "Point size")]
    pub size: Option<u16>,

    /// Style of the resource within its family
    #[clap(
        long = "style",
        default_value = "plain",
        help = "Style mask or names",
        long_help = "Style of this family member: a numeric QuickDraw style mask (3, 0x03) or style names joined by commas (bold,italic). Known styles: bold, italic, underline, outline, shadow, condense, extend."
    )]
    pub style: StyleMask,

    /// Directory for the BDF output
    #[clap(
        long = "output-dir",
        short = 'o',
        help = "Directory to write BDF files into",
        long_help = "Directory to write BDF files into. Defaults to the output_dir setting, or the current directory."
    )]
    pub output_dir: Option<PathBuf>,

    /// Report what would be written without creating files
    #[clap(long = "dry-run", short = 'n', help = "Don't write anything, just report")]
    pub dry_run: bool,

    /// Suppress the progress report
    #[clap(long = "quiet", short = 'q', help = "Don't report dumped fonts")]
    pub quiet: bool,

    /// Enable debug logging
    #[clap(long = "verbose", short = 'v', help = "Enable verbose reporting")]
    pub verbose: bool,

    /// Also write logs to the config directory
    #[clap(
        long = "log-file",
        help = "Also write logs to the logs directory",
        long_help = "Also write logs to ~/.config/nfnt2bdf/logs/nfnt2bdf-<date>.log"
    )]
    pub log_file: bool,

    /// Print the resource summary as JSON instead of converting
    #[clap(long = "info", help = "Print font header and ink bounds as JSON")]
    pub info: bool,

    /// Initialize user configuration directory
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/nfnt2bdf directory with a settings.json file and a logs directory. An existing settings file is left untouched."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that all paths exist and are valid before any conversion
    /// starts, providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if self.new_config {
            return Ok(());
        }

        let Some(path) = &self.resource else {
            return Err(
                "No font resource given\nPass the path to a raw FONT/NFNT resource file."
                    .to_string(),
            );
        };

        if !path.exists() {
            return Err(format!(
                "Font resource does not exist: {}\nMake sure the path is correct and the file exists.",
                path.display()
            ));
        }

        if !path.is_file() {
            return Err(format!(
                "Font resource is not a file: {}\nExpected a raw FONT/NFNT resource file.",
                path.display()
            ));
        }

        if let Some(dir) = &self.output_dir {
            if !dir.is_dir() {
                return Err(format!(
                    "Output directory does not exist: {}\nCreate it first or choose another directory.",
                    dir.display()
                ));
            }
        }

        if !self.info {
            if self.family.is_none() {
                return Err("Missing --family\nThe family name is needed to name the output.".to_string());
            }
            if self.size.is_none() {
                return Err("Missing --size\nThe point size is needed to name the output.".to_string());
            }
        }

        Ok(())
    }

    /// The family member this run converts.
    ///
    /// Missing values become an empty family or zero size, which the
    /// converter rejects as usage errors.
    pub fn font_request(&self) -> FontRequest {
        FontRequest::new(
            self.family.clone().unwrap_or_default(),
            self.style,
            self.size.unwrap_or(0),
        )
    }

    /// Merge CLI flags with the user settings file
    ///
    /// Priority order:
    /// 1. CLI argument
    /// 2. Config file setting (~/.config/nfnt2bdf/settings.json)
    /// 3. Built-in default
    pub fn convert_options(&self, config: Option<&ConfigFile>) -> ConvertOptions {
        let defaults = ConvertOptions::default();

        let output_dir = match (&self.output_dir, config.and_then(|c| c.output_dir.clone())) {
            (Some(dir), _) => {
                debug!("Using output directory from CLI: {:?}", dir);
                dir.clone()
            }
            (None, Some(dir)) => {
                debug!("Using output directory from config file: {:?}", dir);
                dir
            }
            (None, None) => defaults.output_dir,
        };

        let quiet = self.quiet || config.and_then(|c| c.quiet).unwrap_or(false);

        ConvertOptions {
            suppress_progress_report: quiet,
            dry_run: self.dry_run,
            output_dir,
        }
    }

    /// Whether logs should also go to a file
    pub fn log_to_file(&self, config: Option<&ConfigFile>) -> bool {
        self.log_file || config.and_then(|c| c.log_to_file).unwrap_or(false)
    }
}
