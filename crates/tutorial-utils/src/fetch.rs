use tutorial_archive::{ArchiveEntry, extract_zip};
use tutorial_fetch::{Client, FetchError, Fetcher, SchemeClient, Url};

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::options::DatasetOptions;

/// Download and extract `dataset` unless its destination already exists.
///
/// Returns the extracted entries, or an empty list when the destination was
/// already present and nothing was done.
pub fn fetch_dataset(dataset: &Dataset, options: &DatasetOptions) -> Result<Vec<ArchiveEntry>> {
    fetch_dataset_with(SchemeClient::new()?, dataset, options)
}

/// [`fetch_dataset`] with a caller-supplied client.
///
/// The existence of the destination directory is the only gate: if it is
/// there, the client is never used and no archive is opened. Otherwise the
/// archive is fetched into the cache directory (or reused from it, as-is)
/// and expanded into the destination.
pub fn fetch_dataset_with<C: Client>(
    client: C,
    dataset: &Dataset,
    options: &DatasetOptions,
) -> Result<Vec<ArchiveEntry>> {
    let dest = options.destination(dataset)?;
    if dest.exists() {
        tracing::info!(dest = %dest.display(), "destination exists, nothing to do");
        return Ok(Vec::new());
    }

    let url = Url::parse(&dataset.url).map_err(|source| FetchError::InvalidUrl {
        url: dataset.url.clone(),
        source,
    })?;

    tracing::info!(dataset = %dataset.name, "downloading");
    let cache_dir = options.cache_dir()?;
    std::fs::create_dir_all(&cache_dir).map_err(|source| Error::CacheDir {
        path: cache_dir.clone(),
        source,
    })?;
    let archive_path = options.archive_path(dataset)?;
    let archive = Fetcher::new(client).fetch(&url, Some(archive_path.as_path()))?;

    tracing::info!(archive = %archive.display(), dest = %dest.display(), "extracting");
    let entries = extract_zip(&archive, &dest)?;

    Ok(entries)
}

/// Fetch the RSoXS simulation dataset used by the xarray tutorial.
pub fn rsoxs_simulation_data(options: &DatasetOptions) -> Result<Vec<ArchiveEntry>> {
    fetch_dataset(&Dataset::rsoxs_simulation_data(), options)
}
