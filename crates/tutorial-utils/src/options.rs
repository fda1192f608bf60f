use std::path::{Component, Path, PathBuf};

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Where a dataset is extracted and where its archive is cached.
///
/// Every field is optional:
/// - `dest`: destination directory, relative to `path`. Defaults to the
///   dataset name.
/// - `path`: working directory. Defaults to the current directory.
/// - `cache_path`: directory holding the downloaded archive. Defaults to the
///   current directory.
///
/// A leading `~` in `path` or `cache_path` is expanded to the home directory.
///
/// # Examples
///
/// ```
/// use tutorial_utils::DatasetOptions;
///
/// let options = DatasetOptions::default()
///     .path("~/tutorials")
///     .cache_path("~/.cache/tutorials");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetOptions {
    pub dest: Option<PathBuf>,
    pub path: Option<PathBuf>,
    pub cache_path: Option<PathBuf>,
}

impl DatasetOptions {
    #[must_use]
    pub fn dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn cache_path(mut self, cache_path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(cache_path.into());
        self
    }

    /// Absolute-or-relative destination directory for `dataset`.
    pub fn destination(&self, dataset: &Dataset) -> Result<PathBuf> {
        let base = self.working_dir()?;
        let name = self
            .dest
            .clone()
            .unwrap_or_else(|| PathBuf::from(&dataset.name));
        Ok(base.join(name))
    }

    /// Path of the cached archive for `dataset`.
    pub fn archive_path(&self, dataset: &Dataset) -> Result<PathBuf> {
        Ok(self.cache_dir()?.join(&dataset.archive_name))
    }

    pub fn working_dir(&self) -> Result<PathBuf> {
        or_current_dir(self.path.as_deref())
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        or_current_dir(self.cache_path.as_deref())
    }
}

fn or_current_dir(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(expand_user(path)),
        None => std::env::current_dir().map_err(Error::CurrentDir),
    }
}

/// Replace a leading `~` with the user's home directory.
///
/// Paths without one, or systems with no known home, come back unchanged.
pub fn expand_user(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match home::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}
