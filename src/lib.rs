//! nfnt2bdf
//!
//! Decodes Macintosh FONT/NFNT bitmap font resources and writes them out as
//! Adobe Bitmap Distribution Format text.
pub mod core;
pub mod data;
pub mod font_source;
pub mod io;
pub mod logging;
pub mod rendering;

pub use crate::core::{ConvertError, ConvertOptions, DecodeError};
pub use crate::data::bdf::write_bdf;
pub use crate::font_source::{style_name, FontResource, FontSummary, StyleMask};
pub use crate::io::{dump_font, DumpOutcome, FontRequest};
