//! Font resource data structures
//!
//! This module contains everything related to the font resource being
//! converted: its binary layout, summary metrics and style naming.

pub mod metrics;
pub mod resource;
pub mod style;

#[cfg(test)]
pub(crate) mod tests;

// Explicit re-exports for public API
pub use metrics::{FontSummary, FontTypeFlags};
pub use resource::{BitImage, FontHeader, FontResource, GlyphEntry, HEADER_LEN};
pub use style::{output_name, style_name, StyleMask};
