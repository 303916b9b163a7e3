//! Collaborator data types the relink engine reads, mutates and produces.
//! - Entry and LinkedFile mirror the surrounding bibliography database model.
//! - FieldChangeRecord is the hand-off format for the undo collaborator.
//!
//! The stored file field is an opaque string owned by the persistence layer;
//! the engine only interprets it as a single path when checking existence and
//! deriving the name to search for.

use std::path::PathBuf;

/// Name of the entry field that carries the file reference.
pub const FILE_FIELD: &str = "file";

/// A structured file reference attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkedFile {
    pub description: String,
    /// Path or URI of the referenced file.
    pub link: String,
    /// Type hint (e.g. "PDF"); free-form.
    pub file_type: String,
}

impl LinkedFile {
    /// A link with empty description/type, as created for a relocated file.
    pub fn plain(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            ..Self::default()
        }
    }
}

/// A bibliographic entry, identified by a stable key.
///
/// Owned by the surrounding database; the engine mutates the file field and
/// the linked-file list but never creates or destroys entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    /// Raw value of the file field, if set.
    pub file: Option<String>,
    pub linked_files: Vec<LinkedFile>,
}

impl Entry {
    pub fn new(key: impl Into<String>, file: Option<String>) -> Self {
        Self {
            key: key.into(),
            file,
            linked_files: Vec::new(),
        }
    }

    /// The stored field value interpreted as a path. None when the field is
    /// absent or blank.
    pub fn stored_path(&self) -> Option<PathBuf> {
        self.file
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    /// Replace the file field and return the previous raw value.
    pub fn set_file(&mut self, value: impl Into<String>) -> Option<String> {
        self.file.replace(value.into())
    }

    pub fn add_linked_file(&mut self, linked: LinkedFile) {
        self.linked_files.push(linked);
    }
}

/// One recorded field edit, produced per successful relink and consumed by
/// the undo collaborator. Holds the entry key as a back-reference only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChangeRecord {
    pub entry_key: String,
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: String,
}

impl FieldChangeRecord {
    pub fn file_change(entry: &Entry, old_value: Option<String>, new_value: impl Into<String>) -> Self {
        Self {
            entry_key: entry.key.clone(),
            field: FILE_FIELD.to_string(),
            old_value,
            new_value: new_value.into(),
        }
    }
}
