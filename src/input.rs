//! Locating the generated source when no path is given.

use std::path::{Path, PathBuf};

/// Where a generated font table usually lives, relative to the working
/// directory.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "font-8x16.cpp",
    "source/font-8x16.cpp",
    "font-16x32.cpp",
    "source/font-16x32.cpp",
];

/// First candidate that `exists`, or the first candidate if none do, so the
/// eventual read error names a sensible path. `None` only for an empty list.
pub fn resolve_input<P, F>(candidates: &[P], exists: F) -> Option<PathBuf>
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool,
{
    candidates
        .iter()
        .map(AsRef::as_ref)
        .find(|path| exists(path))
        .or_else(|| candidates.first().map(AsRef::as_ref))
        .map(Path::to_path_buf)
}
