//! Glyph rasterization
//!
//! Two passes read glyph columns out of the strike:
//!
//! - [`font_ink`] places every glyph at its kerned position inside the font
//!   rectangle, giving the font-wide ink bounds and the number of glyphs
//!   with ink columns.
//! - [`render_glyph`] copies a single glyph into a raster exactly as wide as
//!   its column span, leaving the kerning offset to be reported separately.

use crate::font_source::resource::{BitImage, FontResource, GlyphEntry};
use crate::rendering::raster::{BoundingBox, GlyphRaster};
use serde::Serialize;
use tracing::debug;

/// Result of the font-wide pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FontInk {
    /// Number of characters with at least one column in the strike
    pub glyph_count: usize,
    /// Ink bounds in font-rectangle coordinates
    pub bounds: Option<BoundingBox>,
}

/// One glyph copied out of the strike.
#[derive(Debug, Clone)]
pub struct RenderedGlyph {
    pub entry: GlyphEntry,
    pub raster: GlyphRaster,
    pub bounds: Option<BoundingBox>,
}

/// Place every glyph at its kerned position inside the font rectangle and
/// measure the combined ink.
///
/// Only set strike pixels are visited, so the work is bounded by the strike
/// in the buffer rather than by the rectangle size the header claims.
pub fn font_ink(resource: &FontResource) -> FontInk {
    let header = resource.header();
    let mut glyphs = resource.glyphs().peekable();
    if glyphs.peek().is_none() {
        return FontInk::default();
    }

    let image = resource.bit_image();
    let width = header.width();
    let mut bounds: Option<BoundingBox> = None;
    let mut glyph_count = 0;

    for glyph in glyphs {
        let x_offset = glyph.origin_offset(header.kern_max);
        let mut clipped = 0;
        for column in glyph.columns.clone() {
            let Some(target) = placed_column(column - glyph.columns.start, x_offset, width) else {
                clipped += 1;
                continue;
            };
            for row in (0..image.height()).filter(|&row| image.bit(row, column)) {
                match bounds.as_mut() {
                    Some(bounds) => bounds.include(row, target),
                    None => bounds = Some(BoundingBox::pixel(row, target)),
                }
            }
        }
        if clipped > 0 {
            debug!(
                "Clipped {} columns of character {} at offset {}",
                clipped, glyph.code, x_offset
            );
        }
        glyph_count += 1;
    }

    FontInk {
        glyph_count,
        bounds,
    }
}

/// Copy one glyph into its own raster.
pub fn render_glyph(image: &BitImage, glyph: GlyphEntry) -> RenderedGlyph {
    let mut raster = GlyphRaster::new(glyph.span(), image.height());
    for (target, column) in glyph.columns.clone().enumerate() {
        for row in 0..image.height() {
            raster.set(row, target, image.bit(row, column));
        }
    }
    let bounds = raster.ink_bounds();
    RenderedGlyph {
        entry: glyph,
        raster,
        bounds,
    }
}

/// Render every glyph with ink columns, in character order.
pub fn render_glyphs<'a>(
    resource: &'a FontResource<'a>,
) -> impl Iterator<Item = RenderedGlyph> + 'a {
    let image = resource.bit_image();
    resource.glyphs().map(move |glyph| render_glyph(&image, glyph))
}

/// Column of the font rectangle that glyph column `relative` lands on when
/// shifted right by `x_offset`, or `None` when it falls outside `0..width`.
fn placed_column(relative: usize, x_offset: i32, width: usize) -> Option<usize> {
    let target = relative as i64 + x_offset as i64;
    (0..width as i64).contains(&target).then_some(target as usize)
}
