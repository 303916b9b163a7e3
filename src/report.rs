//! Aggregation of per-entry outcomes into a batch result.

use crate::errors::RelinkError;
use crate::resolver::RelinkOutcome;

/// Aggregate result of one resolution pass.
///
/// `changed` and `file_exceptions` preserve the order entries were
/// processed in. Skipped outcomes (nothing found / ambiguous) are carried
/// as counts only; they inform the summary wording but need no per-entry
/// attention.
#[derive(Debug, Default)]
pub struct LinkFilesResult {
    /// Keys of entries whose file field was updated.
    pub changed: Vec<String>,
    /// Keys and causes for entries that hit I/O errors.
    pub file_exceptions: Vec<(String, RelinkError)>,
    pub unchanged: usize,
    pub not_found: usize,
    pub ambiguous: usize,
}

impl LinkFilesResult {
    /// Partition a sequence of `(entry key, outcome)` pairs.
    pub fn reduce(outcomes: impl IntoIterator<Item = (String, RelinkOutcome)>) -> Self {
        let mut result = Self::default();
        for (key, outcome) in outcomes {
            match outcome {
                RelinkOutcome::Unchanged => result.unchanged += 1,
                RelinkOutcome::Relinked { .. } => result.changed.push(key),
                RelinkOutcome::NotFound => result.not_found += 1,
                RelinkOutcome::Ambiguous { .. } => result.ambiguous += 1,
                RelinkOutcome::Failed(e) => result.file_exceptions.push((key, e)),
            }
        }
        result
    }

    pub fn has_exceptions(&self) -> bool {
        !self.file_exceptions.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }

    /// User-facing summary line. Failures get a generic pointer to the log
    /// (causes are logged in full where they occur); zero changes without
    /// failures reads differently from a genuine problem.
    pub fn summary(&self) -> String {
        if self.has_exceptions() {
            return format!(
                "Problem finding files for {} entr{}. See the log for details.",
                self.file_exceptions.len(),
                if self.file_exceptions.len() == 1 { "y" } else { "ies" }
            );
        }
        if !self.has_changes() {
            return "Finished relinking moved files. No files found.".to_string();
        }
        format!(
            "Finished relinking moved files. Changed {} entr{}.",
            self.changed.len(),
            if self.changed.len() == 1 { "y" } else { "ies" }
        )
    }
}
