//! Zip extraction for downloaded datasets.
//!
//! # Architecture
//!
//! - `extract.rs` - Expands every member of a zip archive into a directory
//! - `sanitize.rs` - Path sanitization (zip-slip prevention)
//! - `entry.rs` - Per-member descriptors returned to the caller

pub use entry::ArchiveEntry;
pub use error::{Error, Result};
pub use extract::{extract_from_reader, extract_zip};
pub use sanitize::resolve_entry_path;

mod entry;
mod error;
mod extract;
mod sanitize;
