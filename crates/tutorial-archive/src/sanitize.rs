use std::path::{Component, Path, PathBuf};

/// Resolve an archive member name against the extraction base.
///
/// Only plain name components are kept: drive prefixes, leading `/`, `.`
/// and `..` are all dropped, so the result can never leave `base`. Returns
/// `None` when nothing is left, as for the `/` or `./` entries some zip
/// writers emit for the archive root.
pub fn resolve_entry_path<P: AsRef<Path>, B: AsRef<Path>>(entry: P, base: B) -> Option<PathBuf> {
    let relative = normalize_relative(entry.as_ref());
    if relative.as_os_str().is_empty() {
        return None;
    }
    Some(base.as_ref().join(relative))
}

fn normalize_relative(entry: &Path) -> PathBuf {
    entry
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            Component::CurDir | Component::ParentDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect()
}
