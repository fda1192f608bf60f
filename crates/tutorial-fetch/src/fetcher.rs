use std::io;
use std::path::{Path, PathBuf};

use url::Url;

use crate::client::{Client, SchemeClient};
use crate::error::{FetchError, Result};

/// Downloads a URL to a local file unless that file is already there.
pub struct Fetcher<C: Client> {
    client: C,
}

impl<C: Client> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetch `url` into `local_filename`, or reuse the file already there.
    ///
    /// When `local_filename` is `None` the last path segment of the URL is
    /// used, relative to the current directory. An existing file is returned
    /// as-is: its contents are never inspected, so a stale or truncated
    /// archive stays in place until someone deletes it.
    ///
    /// The body is streamed into a hidden temporary file next to the target
    /// and renamed into place once complete. Errors are returned as they
    /// occur; there is no retry.
    pub fn fetch(&self, url: &Url, local_filename: Option<&Path>) -> Result<PathBuf> {
        let destination = match local_filename {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(default_file_name(url)?),
        };

        if destination.exists() {
            tracing::info!(path = %destination.display(), "reusing cached download");
            return Ok(destination);
        }

        tracing::info!(%url, path = %destination.display(), "downloading");
        let mut body = self.client.open(url)?;

        let parent = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staging = tempfile::Builder::new()
            .prefix(".tutorial-fetch-")
            .suffix(".part")
            .tempfile_in(parent)
            .map_err(|source| FetchError::Write {
                path: parent.to_path_buf(),
                source,
            })?;

        let bytes = io::copy(&mut body, staging.as_file_mut()).map_err(|source| {
            FetchError::Transfer {
                url: url.to_string(),
                source,
            }
        })?;

        staging
            .persist(&destination)
            .map_err(|e| FetchError::Persist {
                path: destination.clone(),
                source: e.error,
            })?;

        tracing::debug!(bytes, path = %destination.display(), "download complete");
        Ok(destination)
    }
}

/// Name a download after the last non-empty path segment of its URL.
///
/// Query and fragment are not part of the name, so
/// `https://host/sh/abc/archive?dl=1` becomes `archive`.
pub fn default_file_name(url: &Url) -> Result<String> {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(|| FetchError::NoFileName(url.to_string()))
}

/// Fetch-or-reuse with the default scheme-dispatching client.
pub fn download_file(url: &str, local_filename: Option<&Path>) -> Result<PathBuf> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    Fetcher::new(SchemeClient::new()?).fetch(&parsed, local_filename)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io::{Cursor, Read};

    use super::*;

    struct CountingClient {
        body: Vec<u8>,
        calls: Cell<usize>,
    }

    impl CountingClient {
        fn new(body: &[u8]) -> Self {
            Self {
                body: body.to_vec(),
                calls: Cell::new(0),
            }
        }
    }

    impl Client for CountingClient {
        fn open(&self, _url: &Url) -> Result<Box<dyn Read>> {
            self.calls.set(self.calls.get() + 1);
            Ok(Box::new(Cursor::new(self.body.clone())))
        }
    }

    struct FailingClient;

    impl Client for FailingClient {
        fn open(&self, url: &Url) -> Result<Box<dyn Read>> {
            Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    fn url() -> Url {
        Url::parse("https://example.com/sh/abc/dataset.zip?dl=1").unwrap()
    }

    #[test]
    fn default_name_is_last_segment() {
        assert_eq!(default_file_name(&url()).unwrap(), "dataset.zip");
    }

    #[test]
    fn default_name_skips_trailing_slash() {
        let url = Url::parse("https://example.com/files/archive/").unwrap();
        assert_eq!(default_file_name(&url).unwrap(), "archive");
    }

    #[test]
    fn default_name_missing() {
        let url = Url::parse("https://example.com/").unwrap();
        assert!(matches!(default_file_name(&url), Err(FetchError::NoFileName(_))));
    }

    #[test]
    fn fetch_writes_body() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dataset.zip");
        let fetcher = Fetcher::new(CountingClient::new(b"zip bytes"));

        let path = fetcher.fetch(&url(), Some(target.as_path())).unwrap();

        assert_eq!(path, target);
        assert_eq!(std::fs::read(&target).unwrap(), b"zip bytes");
        assert_eq!(fetcher.client.calls.get(), 1);
    }

    #[test]
    fn fetch_reuses_existing_file_without_request() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dataset.zip");
        std::fs::write(&target, b"stale").unwrap();
        let fetcher = Fetcher::new(CountingClient::new(b"fresh"));

        let path = fetcher.fetch(&url(), Some(target.as_path())).unwrap();

        assert_eq!(path, target);
        assert_eq!(std::fs::read(&target).unwrap(), b"stale");
        assert_eq!(fetcher.client.calls.get(), 0);
    }

    #[test]
    fn fetch_twice_requests_once() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dataset.zip");
        let fetcher = Fetcher::new(CountingClient::new(b"zip bytes"));

        fetcher.fetch(&url(), Some(target.as_path())).unwrap();
        fetcher.fetch(&url(), Some(target.as_path())).unwrap();

        assert_eq!(fetcher.client.calls.get(), 1);
    }

    #[test]
    fn failed_request_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dataset.zip");

        let result = Fetcher::new(FailingClient).fetch(&url(), Some(target.as_path()));

        assert!(matches!(result, Err(FetchError::HttpStatus { status: 404, .. })));
        assert!(!target.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn download_file_rejects_bad_url() {
        let result = download_file("not a url", None);
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }
}
