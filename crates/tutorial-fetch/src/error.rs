//! Error types for tutorial-fetch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("cannot derive a file name from URL '{0}'")]
    NoFileName(String),

    #[error("'{0}' does not name a local file")]
    NotAFilePath(String),

    #[cfg(feature = "reqwest")]
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[cfg(feature = "reqwest")]
    #[error("request to '{url}' failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("HTTP {status} from '{url}'")]
    HttpStatus { url: String, status: u16 },

    #[error("failed to open '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to download '{url}': {source}")]
    Transfer { url: String, source: io::Error },

    #[error("failed to persist download to '{path}': {source}")]
    Persist { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, FetchError>;
