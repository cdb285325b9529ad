//! BDF file output
//!
//! Turns one font resource into one `.bdf` file named after the family,
//! style and point size.

use crate::core::config::ConvertOptions;
use crate::core::errors::ConvertError;
use crate::data::bdf::write_bdf;
use crate::font_source::style::{output_name, StyleMask};
use crate::font_source::{FontResource, FontSummary};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Which family member a resource belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRequest {
    pub family: String,
    pub style: StyleMask,
    /// Point size
    pub size: u16,
}

impl FontRequest {
    pub fn new(family: impl Into<String>, style: StyleMask, size: u16) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }

    /// Reject requests that could never name an output file.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.family.trim().is_empty() {
            return Err(ConvertError::MissingFamily);
        }
        if self.size == 0 {
            return Err(ConvertError::ZeroSize);
        }
        Ok(())
    }

    /// Name used for the `FONT` line and the file stem.
    pub fn font_name(&self) -> String {
        output_name(&self.family, &self.style.name(), self.size)
    }

    /// Where the BDF file for this request goes inside `output_dir`.
    pub fn destination(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.bdf", self.font_name()))
    }
}

/// What a conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpOutcome {
    /// The file was written.
    Written { glyphs: usize, path: PathBuf },
    /// Dry run: every metric was computed but no file was created.
    DryRun { glyphs: usize, path: PathBuf },
    /// The resource holds no glyphs, so no file was created.
    NoGlyphs,
}

impl DumpOutcome {
    pub fn glyph_count(&self) -> usize {
        match self {
            Self::Written { glyphs, .. } | Self::DryRun { glyphs, .. } => *glyphs,
            Self::NoGlyphs => 0,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Written { path, .. } | Self::DryRun { path, .. } => Some(path),
            Self::NoGlyphs => None,
        }
    }
}

/// Convert one font resource to a BDF file.
///
/// The request is checked before the resource is decoded, so usage errors
/// never touch the file system. A resource without glyphs produces no file.
/// Otherwise the file `<family><style>-<size>.bdf` is created in
/// `options.output_dir`; **an existing file with that name is silently
/// replaced.** With `options.dry_run` the document is rendered and
/// discarded, and the path it would have used is reported.
///
/// Unless `options.suppress_progress_report` is set, a one-line progress
/// report is printed to stdout.
pub fn dump_font(
    data: &[u8],
    request: &FontRequest,
    options: &ConvertOptions,
) -> Result<DumpOutcome, ConvertError> {
    request.validate()?;

    let resource = FontResource::parse(data)?;
    let summary = FontSummary::from_resource(&resource);
    let font_name = request.font_name();

    if summary.is_empty() {
        info!("{} has no glyphs, nothing to dump", font_name);
        return Ok(DumpOutcome::NoGlyphs);
    }

    let path = request.destination(&options.output_dir);
    debug!(
        "{}: {} glyphs, ink bounds {:?}",
        font_name, summary.glyph_count, summary.ink_bounds
    );

    if options.dry_run {
        let glyphs = write_bdf(&resource, &summary, &font_name, request.size, io::sink())?;
        if !options.suppress_progress_report {
            println!("Would dump {} glyphs to \"{}\"", glyphs, path.display());
        }
        return Ok(DumpOutcome::DryRun { glyphs, path });
    }

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(source) => {
            warn!("Can't create output file {:?}: {}", path, source);
            return Err(ConvertError::Destination {
                path,
                summary: Box::new(summary),
                source,
            });
        }
    };

    if !options.suppress_progress_report {
        println!(
            "Dumping {} glyphs to \"{}\"",
            summary.glyph_count,
            path.display()
        );
    }

    let glyphs = write_bdf(
        &resource,
        &summary,
        &font_name,
        request.size,
        BufWriter::new(file),
    )
    .map_err(|source| ConvertError::Write {
        path: path.clone(),
        source,
    })?;

    info!("Wrote {} glyphs to {:?}", glyphs, path);
    Ok(DumpOutcome::Written { glyphs, path })
}
