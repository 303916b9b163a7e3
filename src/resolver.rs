//! Per-entry relink resolution.
//!
//! For each entry: if the stored file reference still resolves on disk the
//! entry is left alone; otherwise the configured search roots are scanned
//! for a file with the same name, the candidate must pass the sibling
//! uniqueness check, and only then are the field and linked-file list
//! updated. Everything before that final step is read-only against the
//! entry.
//!
//! Entries are processed strictly sequentially. Failures are converted to
//! per-entry outcomes and never abort the batch; cancellation is checked
//! between entries, so entries already relinked when a pass is cancelled
//! stay relinked.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::errors::RelinkError;
use crate::model::{Entry, FieldChangeRecord, LinkedFile};
use crate::search;
use crate::uniqueness;

/// Terminal state of one entry after a resolution pass.
#[derive(Debug)]
pub enum RelinkOutcome {
    /// Stored reference still valid (or nothing to relink); no-op.
    Unchanged,
    /// A unique relocated file was found and the entry was updated.
    Relinked {
        linked: LinkedFile,
        change: FieldChangeRecord,
    },
    /// No candidate under any search root.
    NotFound,
    /// A candidate exists but is not the only file of that name in its
    /// directory; the entry is deliberately left untouched.
    Ambiguous { candidate: PathBuf },
    /// An I/O error prevented a conclusive answer for this entry.
    Failed(RelinkError),
}

impl RelinkOutcome {
    pub fn is_relinked(&self) -> bool {
        matches!(self, RelinkOutcome::Relinked { .. })
    }
}

/// Resolve a single entry against the ordered search roots.
pub fn relink_entry(entry: &mut Entry, roots: &[PathBuf]) -> RelinkOutcome {
    let stored = match entry.stored_path() {
        Some(p) => p,
        None => return RelinkOutcome::Unchanged,
    };

    if stored.try_exists().unwrap_or(false) {
        debug!(key = %entry.key, path = %stored.display(), "File reference still valid");
        return RelinkOutcome::Unchanged;
    }

    let target = match stored.file_name() {
        Some(name) => name.to_os_string(),
        // A reference like ".." has nothing we can search for.
        None => return RelinkOutcome::NotFound,
    };

    let mut search_errors = Vec::new();
    let candidate = search::locate_moved_file(&target, roots, &mut search_errors);

    let candidate = match candidate {
        Some(c) => {
            for e in &search_errors {
                warn!(key = %entry.key, error = %e, "Search root skipped before match was found");
            }
            c
        }
        None => {
            if search_errors.is_empty() {
                debug!(key = %entry.key, target = %target.to_string_lossy(), "No relocated candidate found");
                return RelinkOutcome::NotFound;
            }
            let first = search_errors.remove(0);
            for e in &search_errors {
                warn!(key = %entry.key, error = %e, "Additional search failure");
            }
            return RelinkOutcome::Failed(first);
        }
    };

    match uniqueness::is_unique_sibling(&candidate) {
        Ok(true) => {}
        Ok(false) => {
            warn!(
                key = %entry.key,
                candidate = %candidate.display(),
                "Candidate is not a unique sibling; leaving entry unresolved"
            );
            return RelinkOutcome::Ambiguous { candidate };
        }
        Err(e) => return RelinkOutcome::Failed(e),
    }

    // Canonicalize best-effort for a stable stored value; the uniqueness
    // check already ran against the directory we are about to reference.
    let resolved = dunce::canonicalize(&candidate).unwrap_or(candidate);
    let new_value = resolved.to_string_lossy().into_owned();
    let old_value = entry.file.clone();

    let change = FieldChangeRecord::file_change(entry, old_value.clone(), new_value.clone());
    let linked = LinkedFile::plain(new_value.clone());

    entry.set_file(new_value.clone());
    entry.add_linked_file(linked.clone());

    info!(
        key = %entry.key,
        old = %old_value.as_deref().unwrap_or("<none>"),
        new = %new_value,
        "Relinked moved file"
    );

    RelinkOutcome::Relinked { linked, change }
}

/// Run a resolution pass over all entries.
///
/// `cancelled` is checked between entries (cooperative cancellation; already
/// processed entries keep their state). `on_relinked` is invoked exactly
/// once per successful relink, synchronously and never concurrently, after
/// the entry has been mutated.
pub fn relink_all<C, H>(
    entries: &mut [Entry],
    roots: &[PathBuf],
    mut cancelled: C,
    mut on_relinked: H,
) -> Vec<(String, RelinkOutcome)>
where
    C: FnMut() -> bool,
    H: FnMut(&LinkedFile, &Entry),
{
    let mut outcomes = Vec::with_capacity(entries.len());

    for entry in entries.iter_mut() {
        if cancelled() {
            warn!(
                processed = outcomes.len(),
                "Resolution pass cancelled; remaining entries left untouched"
            );
            break;
        }

        let outcome = relink_entry(entry, roots);
        if let RelinkOutcome::Relinked { linked, .. } = &outcome {
            on_relinked(linked, entry);
        }
        outcomes.push((entry.key.clone(), outcome));
    }

    outcomes
}
