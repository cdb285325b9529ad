pub mod output;

// Explicit re-exports for public API
pub use output::{dump_font, DumpOutcome, FontRequest};
