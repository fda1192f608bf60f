use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to resolve the current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("failed to create cache directory '{path}': {source}")]
    CacheDir { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Fetch(#[from] tutorial_fetch::FetchError),

    #[error(transparent)]
    Archive(#[from] tutorial_archive::Error),
}
