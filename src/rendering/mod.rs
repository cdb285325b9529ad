//! Glyph rasterization
//!
//! Unpacks the strike of a font resource into pixel grids and measures the
//! ink they contain.

pub mod raster;
pub mod rasterizer;

pub use raster::{BoundingBox, GlyphRaster};
pub use rasterizer::{font_ink, render_glyph, render_glyphs, FontInk, RenderedGlyph};
