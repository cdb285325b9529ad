//! Adobe Bitmap Distribution Format output
//!
//! Serializes a parsed font resource as a BDF 2.1 document. Metrics follow
//! the Macintosh screen model: a fixed 72x72 dpi device, scalable widths of
//! `advance * 720`, and vertical origins measured from the baseline
//! `rectHeight - descent` rows below the top of the strike.

use crate::font_source::resource::{FontHeader, FontResource};
use crate::font_source::FontSummary;
use crate::rendering::rasterizer::{render_glyphs, RenderedGlyph};
use std::fmt;
use std::io::{self, Write};

/// Device resolution of the Macintosh screen, in dots per inch.
pub const DEVICE_RESOLUTION: u32 = 72;

/// Factor turning a pixel advance into a BDF scalable width.
pub const SWIDTH_SCALE: i32 = 720;

/// A BDF bounding box: size, then offset of the lower-left corner from the
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BdfBox {
    pub width: i32,
    pub height: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl BdfBox {
    /// The `FONTBOUNDINGBOX` of a font. A font without any ink gets an
    /// empty box at the kerning origin.
    pub fn for_font(summary: &FontSummary) -> Self {
        let header = &summary.header;
        match summary.ink_bounds {
            Some(bounds) => Self {
                width: bounds.width() as i32,
                height: bounds.height() as i32,
                x_offset: header.kern_max as i32,
                y_offset: header.baseline() - (bounds.bottom as i32 + 1),
            },
            None => Self {
                width: 0,
                height: 0,
                x_offset: header.kern_max as i32,
                y_offset: 0,
            },
        }
    }

    /// The `BBX` of one glyph. The width is always the full column span so
    /// every bitmap row covers the same columns.
    pub fn for_glyph(glyph: &RenderedGlyph, header: &FontHeader) -> Self {
        let x_offset = glyph.entry.origin_offset(header.kern_max);
        match glyph.bounds {
            Some(bounds) => Self {
                width: glyph.entry.span() as i32,
                height: bounds.height() as i32,
                x_offset,
                y_offset: header.baseline() - (bounds.bottom as i32 + 1),
            },
            None => Self {
                width: glyph.entry.span() as i32,
                height: 0,
                x_offset,
                y_offset: 0,
            },
        }
    }
}

impl fmt::Display for BdfBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.width, self.height, self.x_offset, self.y_offset
        )
    }
}

/// Glyph name for a character code, e.g. `GCID41` for `A`.
pub fn glyph_name(code: u16) -> String {
    format!("GCID{code:02X}")
}

/// Uppercase hex digits of a packed bitmap row.
pub fn hex_row(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02X}")).collect()
}

/// Writes BDF records to any byte sink.
pub struct BdfWriter<W: Write> {
    out: W,
}

impl<W: Write> BdfWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the complete document for `resource` and return the number of
    /// glyphs written.
    ///
    /// `summary` must come from the same resource. When it reports no
    /// glyphs, nothing at all is written.
    pub fn write_font(
        &mut self,
        resource: &FontResource,
        summary: &FontSummary,
        font_name: &str,
        size: u16,
    ) -> io::Result<usize> {
        if summary.is_empty() {
            return Ok(0);
        }

        self.write_header(summary, font_name, size)?;

        let header = resource.header();
        let mut written = 0;
        for glyph in render_glyphs(resource) {
            self.write_glyph(&glyph, header)?;
            written += 1;
        }

        writeln!(self.out, "ENDFONT")?;
        self.out.flush()?;
        Ok(written)
    }

    /// Everything up to and including the `CHARS` line.
    pub fn write_header(
        &mut self,
        summary: &FontSummary,
        font_name: &str,
        size: u16,
    ) -> io::Result<()> {
        let header = &summary.header;
        writeln!(self.out, "STARTFONT 2.1")?;
        writeln!(self.out, "FONT {font_name}")?;
        writeln!(
            self.out,
            "SIZE {size} {DEVICE_RESOLUTION} {DEVICE_RESOLUTION}"
        )?;
        writeln!(self.out, "FONTBOUNDINGBOX {}", BdfBox::for_font(summary))?;
        writeln!(self.out, "STARTPROPERTIES 2")?;
        writeln!(self.out, "FONT_ASCENT {}", header.ascent)?;
        writeln!(self.out, "FONT_DESCENT {}", header.descent)?;
        writeln!(self.out, "ENDPROPERTIES")?;
        writeln!(self.out, "CHARS {}", summary.glyph_count)?;
        Ok(())
    }

    /// One `STARTCHAR` .. `ENDCHAR` record. Only rows between the glyph's
    /// top and bottom ink are written.
    pub fn write_glyph(&mut self, glyph: &RenderedGlyph, header: &FontHeader) -> io::Result<()> {
        let entry = &glyph.entry;
        let advance = entry.advance_width() as i32;

        writeln!(self.out, "STARTCHAR {}", glyph_name(entry.code))?;
        writeln!(self.out, "ENCODING {}", entry.code)?;
        writeln!(self.out, "SWIDTH {} 0", advance * SWIDTH_SCALE)?;
        writeln!(self.out, "DWIDTH {advance} 0")?;
        writeln!(self.out, "BBX {}", BdfBox::for_glyph(glyph, header))?;
        writeln!(self.out, "BITMAP")?;
        if let Some(bounds) = glyph.bounds {
            for row in bounds.top..=bounds.bottom {
                writeln!(self.out, "{}", hex_row(&glyph.raster.packed_row(row)))?;
            }
        }
        writeln!(self.out, "ENDCHAR")?;
        Ok(())
    }
}

/// Render `resource` as a BDF document into `out`.
pub fn write_bdf<W: Write>(
    resource: &FontResource,
    summary: &FontSummary,
    font_name: &str,
    size: u16,
    out: W,
) -> io::Result<usize> {
    BdfWriter::new(out).write_font(resource, summary, font_name, size)
}
