//! Fetch-or-reuse downloads.
//!
//! A URL is downloaded to a local file once; later calls find the file in
//! place and return it without touching the network. Nothing is verified,
//! retried, or resumed.
//!
//! - `client.rs` - Blocking byte sources per URL scheme
//! - `fetcher.rs` - Cache check and atomic placement

mod client;
mod error;
mod fetcher;

pub use client::{Client, ClientOptions, FileClient, SchemeClient};
pub use error::{FetchError, Result};
pub use fetcher::{Fetcher, default_file_name, download_file};

#[cfg(feature = "reqwest")]
pub use client::ReqwestClient;

pub use url::Url;
