use std::path::PathBuf;

/// One member of an extracted archive, as listed in its central directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Name as stored in the archive, `/`-separated.
    pub name: String,
    /// Where the member landed on disk.
    pub target_path: PathBuf,
    pub size: u64,
    pub compressed_size: u64,
    pub crc32: u32,
    pub is_directory: bool,
    pub unix_mode: Option<u32>,
}
