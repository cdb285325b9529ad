//! Binary input decoding and BDF text output

pub mod bdf;
pub mod bytes;

pub use bdf::{write_bdf, BdfBox, BdfWriter};
