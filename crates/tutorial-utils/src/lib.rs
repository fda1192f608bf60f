//! Download-and-extract helpers for tutorial datasets.
//!
//! Each dataset is a zip archive at a fixed URL. The archive is cached on
//! disk and expanded once into a destination directory; if that directory
//! already exists nothing happens at all.
//!
//! ```no_run
//! use tutorial_utils::{DatasetOptions, rsoxs_simulation_data};
//!
//! let entries = rsoxs_simulation_data(&DatasetOptions::default().path("~/tutorials"))?;
//! for entry in &entries {
//!     println!("{}", entry.name);
//! }
//! # Ok::<(), tutorial_utils::Error>(())
//! ```

mod dataset;
mod error;
mod fetch;
mod options;

pub use dataset::{Dataset, RSOXS_SIMULATION_DATA_URL};
pub use error::{Error, Result};
pub use fetch::{fetch_dataset, fetch_dataset_with, rsoxs_simulation_data};
pub use options::{DatasetOptions, expand_user};

pub use tutorial_archive::ArchiveEntry;
pub use tutorial_fetch::{Client, FileClient, SchemeClient};
