//! Shallow name matching inside a single directory.
//!
//! Listing is non-recursive and the comparison is an exact, case-sensitive
//! match on the final name component. Callers that want case-insensitive
//! behavior must normalize before calling.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::RelinkError;

/// Immediate children of `directory` whose file name equals `target`.
///
/// "No matches" is an empty vec, not an error; an unlistable directory
/// (permissions, not a directory, vanished mid-scan) is a `ListDir` error.
pub fn matches_in_directory(directory: &Path, target: &OsStr) -> Result<Vec<PathBuf>, RelinkError> {
    let reader = fs::read_dir(directory).map_err(|source| RelinkError::ListDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut found = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|source| RelinkError::ListDir {
            path: directory.to_path_buf(),
            source,
        })?;
        if entry.file_name().as_os_str() == target {
            found.push(entry.path());
        }
    }
    Ok(found)
}

/// Number of immediate children of `directory` named `target`.
pub fn sibling_count(directory: &Path, target: &OsStr) -> Result<usize, RelinkError> {
    matches_in_directory(directory, target).map(|m| m.len())
}
