//! XML persistence for entries.
//!
//! This is the CLI's stand-in for the surrounding database layer: a flat
//! file of entries with their file field and linked files. The engine never
//! touches this module; it only sees the in-memory `Entry` values.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::model::{Entry, LinkedFile};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "library")]
struct XmlLibrary {
    #[serde(rename = "entry", default)]
    entry: Vec<XmlEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct XmlEntry {
    #[serde(rename = "@key")]
    key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(rename = "linked_file", default)]
    linked_file: Vec<XmlLinkedFile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct XmlLinkedFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    link: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    file_type: Option<String>,
}

fn none_if_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl From<XmlEntry> for Entry {
    fn from(x: XmlEntry) -> Self {
        let mut entry = Entry::new(x.key, x.file);
        for lf in x.linked_file {
            entry.add_linked_file(LinkedFile {
                description: lf.description.unwrap_or_default(),
                link: lf.link,
                file_type: lf.file_type.unwrap_or_default(),
            });
        }
        entry
    }
}

impl From<&Entry> for XmlEntry {
    fn from(e: &Entry) -> Self {
        XmlEntry {
            key: e.key.clone(),
            file: e.file.clone(),
            linked_file: e
                .linked_files
                .iter()
                .map(|lf| XmlLinkedFile {
                    description: none_if_empty(lf.description.clone()),
                    link: lf.link.clone(),
                    file_type: none_if_empty(lf.file_type.clone()),
                })
                .collect(),
        }
    }
}

/// Load all entries from a library XML file, preserving file order.
pub fn load_library(path: &Path) -> Result<Vec<Entry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read library '{}'", path.display()))?;
    let parsed: XmlLibrary = from_xml_str(&contents)
        .with_context(|| format!("parse library '{}'", path.display()))?;
    let entries: Vec<Entry> = parsed.entry.into_iter().map(Entry::from).collect();
    debug!(count = entries.len(), "Loaded library {}", path.display());
    Ok(entries)
}

/// Write all entries back to a library XML file.
pub fn save_library(path: &Path, entries: &[Entry]) -> Result<()> {
    let library = XmlLibrary {
        entry: entries.iter().map(XmlEntry::from).collect(),
    };

    let mut out = String::new();
    let mut ser = Serializer::new(&mut out);
    ser.indent(' ', 2);
    library
        .serialize(ser)
        .with_context(|| format!("serialize library '{}'", path.display()))?;
    out.push('\n');

    fs::write(path, out).with_context(|| format!("write library '{}'", path.display()))?;
    debug!(count = entries.len(), "Saved library {}", path.display());
    Ok(())
}
