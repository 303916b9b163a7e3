//! Undo hand-off: an ordered batch of field changes committed as one unit.
//!
//! The engine produces one `FieldChangeRecord` per successful relink; the
//! caller stages them here and hands the whole compound to its undo
//! machinery. Either every edit from a pass is committed or none is.

use crate::model::{Entry, FieldChangeRecord};

/// A named, ordered batch of field edits.
#[derive(Debug, Default)]
pub struct RelinkCompound {
    name: String,
    records: Vec<FieldChangeRecord>,
}

impl RelinkCompound {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, record: FieldChangeRecord) {
        self.records.push(record);
    }

    pub fn has_edits(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn records(&self) -> &[FieldChangeRecord] {
        &self.records
    }

    /// Apply the recorded old values back onto `entries`, most recent edit
    /// first. Records whose entry is absent are skipped; the attached
    /// linked-file entries added alongside the field edit are removed when
    /// their link equals the record's new value.
    pub fn revert(&self, entries: &mut [Entry]) {
        for record in self.records.iter().rev() {
            if let Some(entry) = entries.iter_mut().find(|e| e.key == record.entry_key) {
                entry.file = record.old_value.clone();
                entry.linked_files.retain(|lf| lf.link != record.new_value);
            }
        }
    }
}
