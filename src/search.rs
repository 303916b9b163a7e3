//! Moved-file discovery across an ordered list of search roots.
//!
//! Roots are walked recursively in caller order and the first file whose
//! name equals the target wins, so behavior stays predictable when the same
//! name exists under several roots. A root that cannot be walked at all is
//! reported through the error side channel and does not abort the search of
//! the remaining roots; unreadable descendants inside an otherwise walkable
//! root are logged and skipped.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::RelinkError;

/// Search `roots` in order for a file named `target`.
///
/// Returns the first hit across the whole ordered list. Walk failures are
/// pushed into `errors`; a None result with a non-empty `errors` means the
/// search was incomplete, not that the file is definitely absent.
pub fn locate_moved_file(
    target: &OsStr,
    roots: &[PathBuf],
    errors: &mut Vec<RelinkError>,
) -> Option<PathBuf> {
    for root in roots {
        match search_root(root, target, errors) {
            Some(found) => {
                debug!(root = %root.display(), found = %found.display(), "Located moved file");
                return Some(found);
            }
            None => continue,
        }
    }
    None
}

/// Recursive walk of a single root; first matching file wins.
fn search_root(root: &Path, target: &OsStr, errors: &mut Vec<RelinkError>) -> Option<PathBuf> {
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && entry.file_name() == target {
                    return Some(entry.into_path());
                }
            }
            Err(e) => {
                // Depth 0 means the root itself could not be read; give up on
                // this root and let the caller account for the gap.
                if e.depth() == 0 {
                    errors.push(RelinkError::WalkRoot {
                        root: root.to_path_buf(),
                        source: e,
                    });
                    return None;
                }
                warn!(
                    root = %root.display(),
                    error = %e,
                    "Skipping unreadable path during search"
                );
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use std::ffi::OsString;

    #[test]
    fn finds_file_in_nested_directory() {
        let root = assert_fs::TempDir::new().unwrap();
        root.child("sub/deeper/a.pdf").touch().unwrap();

        let mut errors = Vec::new();
        let found = locate_moved_file(
            &OsString::from("a.pdf"),
            &[root.path().to_path_buf()],
            &mut errors,
        );
        assert_eq!(found, Some(root.path().join("sub/deeper/a.pdf")));
        assert!(errors.is_empty());
    }

    #[test]
    fn directories_with_matching_name_are_ignored() {
        let root = assert_fs::TempDir::new().unwrap();
        root.child("a.pdf/real.txt").touch().unwrap();

        let mut errors = Vec::new();
        let found = locate_moved_file(
            &OsString::from("a.pdf"),
            &[root.path().to_path_buf()],
            &mut errors,
        );
        assert_eq!(found, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_root_goes_to_error_channel() {
        let dir = assert_fs::TempDir::new().unwrap();
        let absent = dir.path().join("never");
        let present = dir.child("present");
        present.create_dir_all().unwrap();
        present.child("a.pdf").touch().unwrap();

        let mut errors = Vec::new();
        let found = locate_moved_file(
            &OsString::from("a.pdf"),
            &[absent, present.path().to_path_buf()],
            &mut errors,
        );
        assert_eq!(found, Some(present.path().join("a.pdf")));
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], RelinkError::WalkRoot { .. }));
    }
}
