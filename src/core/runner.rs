//! Application runner logic
//!
//! Handles the different ways to run nfnt2bdf

use crate::core::cli::CliArgs;
use crate::core::config::ConfigFile;
use crate::core::errors::ConvertError;
use crate::font_source::{FontResource, FontSummary};
use crate::io::{dump_font, DumpOutcome};
use crate::logging;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Run nfnt2bdf with the given CLI arguments.
/// Handles special CLI flags and delegates to the converter.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    cli_args.validate().map_err(anyhow::Error::msg)?;

    // The settings decide whether to log to a file, but problems with them
    // can only be logged once the subscriber exists.
    let settings_path = ConfigFile::config_path();
    let loaded = ConfigFile::read_from(&settings_path);
    let log_to_file = cli_args.log_to_file(loaded.as_ref().ok().and_then(Option::as_ref));
    let _logging = logging::init_logging(cli_args.verbose, log_to_file)?;
    let config = ConfigFile::report(&settings_path, loaded);

    let Some(path) = cli_args.resource.as_deref() else {
        anyhow::bail!("No font resource given");
    };
    let data = read_resource(path)?;

    if cli_args.info {
        return print_summary(&data, path);
    }

    let request = cli_args.font_request();
    let options = cli_args.convert_options(config.as_ref());

    match dump_font(&data, &request, &options) {
        Ok(DumpOutcome::NoGlyphs) => {
            if !options.suppress_progress_report {
                println!("No glyphs in {}, nothing to dump", path.display());
            }
            Ok(())
        }
        Ok(outcome) => {
            info!(
                "Converted {} ({} glyphs)",
                path.display(),
                outcome.glyph_count()
            );
            Ok(())
        }
        Err(ConvertError::Destination {
            path: destination,
            summary,
            source,
        }) => {
            eprintln!(
                "{} glyphs of {} were ready to dump (ink bounds {:?})",
                summary.glyph_count,
                request.font_name(),
                summary.ink_bounds
            );
            Err(source).with_context(|| {
                format!("Can't create output file \"{}\"", destination.display())
            })
        }
        Err(error) => {
            Err(error).with_context(|| format!("Failed to convert {}", path.display()))
        }
    }
}

fn read_resource(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)
        .with_context(|| format!("Failed to read font resource {}", path.display()))?;
    info!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Print the header fields and font-wide ink measurements as JSON.
fn print_summary(data: &[u8], path: &Path) -> Result<()> {
    let resource = FontResource::parse(data)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    let summary = FontSummary::from_resource(&resource);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
