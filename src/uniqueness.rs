//! Uniqueness policy for candidate matches.
//!
//! A relocated file is only accepted when it is the single file of that name
//! in its directory. Anything else (duplicates appearing through races or
//! unusual file systems, or the candidate vanishing before the recheck)
//! blocks the relink rather than guessing.

use std::path::Path;

use crate::errors::RelinkError;
use crate::matcher;

/// Decision rule: exactly one same-named sibling.
#[inline]
pub fn is_unique_count(count: usize) -> bool {
    count == 1
}

/// True iff `candidate` is the only file with its name in its parent
/// directory, per a fresh listing.
///
/// I/O failures propagate so the caller can treat the candidate as not
/// accepted (fail-safe, not fail-open).
pub fn is_unique_sibling(candidate: &Path) -> Result<bool, RelinkError> {
    let name = candidate
        .file_name()
        .ok_or_else(|| RelinkError::NoFileName(candidate.to_path_buf()))?;
    let parent = candidate
        .parent()
        .ok_or_else(|| RelinkError::NoParent(candidate.to_path_buf()))?;

    let count = matcher::sibling_count(parent, name)?;
    Ok(is_unique_count(count))
}
