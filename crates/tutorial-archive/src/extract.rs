//! Zip extraction.
//!
//! Every member is written straight into the destination. If extraction
//! fails halfway, whatever was already written stays on disk.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

use crate::entry::ArchiveEntry;
use crate::error::{Error, Result};
use crate::sanitize::resolve_entry_path;

/// Extract the zip archive at `archive` into `destination`.
pub fn extract_zip(archive: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<Vec<ArchiveEntry>> {
    let archive = archive.as_ref();
    let file = File::open(archive).map_err(|source| Error::Open {
        path: archive.to_path_buf(),
        source,
    })?;
    extract_from_reader(BufReader::new(file), destination)
}

/// Extract a zip archive read from `reader` into `destination`.
///
/// The central directory is read before anything touches the filesystem, so
/// an archive that is not a zip at all leaves `destination` untouched.
/// Returns one [`ArchiveEntry`] per member, in archive order. Members whose
/// name is only the archive root (`/`, `./`) are listed with `destination`
/// as their target and nothing is written for them.
pub fn extract_from_reader<R: Read + Seek>(
    reader: R,
    destination: impl AsRef<Path>,
) -> Result<Vec<ArchiveEntry>> {
    let destination = destination.as_ref();
    let mut archive = zip::ZipArchive::new(reader)?;

    ensure_directory(destination)?;

    let mut entries = Vec::with_capacity(archive.len());
    let mut total_bytes = 0u64;

    for index in 0..archive.len() {
        let mut member = archive.by_index(index)?;
        let name = member.name().to_string();
        let is_directory = member.is_dir();
        let target_path = match resolve_entry_path(Path::new(&name), destination) {
            Some(target_path) => {
                if is_directory {
                    ensure_directory(&target_path)?;
                } else {
                    write_file(&mut member, &target_path)?;
                }
                target_path
            }
            None => {
                tracing::debug!(entry = %name, "entry names the archive root, nothing to write");
                destination.to_path_buf()
            }
        };

        let size = member.size();
        total_bytes += size;
        tracing::debug!(entry = %name, size, "extracted");

        entries.push(ArchiveEntry {
            name,
            target_path,
            size,
            compressed_size: member.compressed_size(),
            crc32: member.crc32(),
            is_directory,
            unix_mode: member.unix_mode(),
        });
    }

    tracing::info!(
        entries = entries.len(),
        total_bytes,
        destination = %destination.display(),
        "archive extracted"
    );
    Ok(entries)
}

fn write_file(member: &mut impl Read, target_path: &Path) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        ensure_directory(parent)?;
    }

    let mut file = File::create(target_path).map_err(|source| Error::ExtractionFailed {
        path: target_path.to_path_buf(),
        source,
    })?;
    io::copy(member, &mut file).map_err(|source| Error::ExtractionFailed {
        path: target_path.to_path_buf(),
        source,
    })?;

    Ok(())
}

fn ensure_directory(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path).map_err(|source| Error::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
