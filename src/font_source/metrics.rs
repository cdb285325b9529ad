//! Font metrics and summary information
//!
//! This module gathers the header fields of a font resource together with
//! the results of the font-wide ink pass. The summary is what `--info`
//! prints and what a failed conversion still reports.

use crate::font_source::resource::{FontHeader, FontResource};
use crate::rendering::raster::BoundingBox;
use crate::rendering::rasterizer::font_ink;
use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Known bits of the `fontType` header word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct FontTypeFlags: u16 {
        const HAS_IMAGE_HEIGHT_TABLE = 0x0001;
        const HAS_WIDTH_TABLE = 0x0002;
        const HAS_COLOR_TABLE = 0x0080;
        const SYNTHETIC = 0x0100;
        const HAS_COLOR = 0x0200;
        const FIXED_WIDTH = 0x2000;
    }
}

/// Header fields plus font-wide ink measurements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontSummary {
    pub header: FontHeader,
    pub flags: FontTypeFlags,
    /// Bits per pixel of the strike
    pub pixel_depth: u8,
    /// Characters with at least one column in the strike
    pub glyph_count: usize,
    /// Bounds of all ink with glyphs placed at their kerned positions
    pub ink_bounds: Option<BoundingBox>,
}

impl FontSummary {
    /// Run the font-wide pass over `resource` and collect its metrics.
    pub fn from_resource(resource: &FontResource) -> Self {
        let header = *resource.header();
        let ink = font_ink(resource);
        Self {
            flags: FontTypeFlags::from_bits_truncate(header.font_type),
            pixel_depth: 1 << ((header.font_type >> 2) & 0x3),
            header,
            glyph_count: ink.glyph_count,
            ink_bounds: ink.bounds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.glyph_count == 0
    }

    pub fn is_fixed_width(&self) -> bool {
        self.flags.contains(FontTypeFlags::FIXED_WIDTH)
    }
}
