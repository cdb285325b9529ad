//! Error types for decoding font resources and producing BDF output

use crate::font_source::FontSummary;
use std::path::PathBuf;
use thiserror::Error;

/// A font resource buffer that does not match the layout its header describes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("resource is {len} bytes, shorter than the {needed}-byte font header")]
    TruncatedHeader { len: usize, needed: usize },

    #[error("header field {field} is negative ({value})")]
    NegativeField { field: &'static str, value: i16 },

    #[error("last character {last} precedes first character {first}")]
    InvalidCharRange { first: u16, last: u16 },

    #[error("{region} needs bytes {start}..{end} but the resource is only {len} bytes")]
    RegionOutOfBounds {
        region: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("location table decreases at character {code}: {start} > {end}")]
    DecreasingLocation { code: u16, start: u16, end: u16 },

    #[error("character {code} ends at bit column {column}, past the {width}-column bitmap")]
    ColumnOutOfRange { code: u16, column: u16, width: usize },
}

/// Failure to turn a font resource into a BDF file.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("a font family name is required")]
    MissingFamily,

    #[error("point size must be greater than zero")]
    ZeroSize,

    #[error("malformed font resource: {0}")]
    Decode(#[from] DecodeError),

    /// The output file could not be created. The summary computed before the
    /// attempt is kept so callers can still report it.
    #[error("can't create output file \"{}\": {source}", path.display())]
    Destination {
        path: PathBuf,
        summary: Box<FontSummary>,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing \"{}\": {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Whether this error was caused by the arguments rather than the data
    /// or the file system.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::MissingFamily | Self::ZeroSize)
    }
}
