//! Core library for `bib_relink`.
//!
//! Locates files referenced by bibliographic entries that have moved or gone
//! missing, re-establishes the link when a unique relocated candidate is
//! found, and records each change so it can be undone.
//!
//! The engine is deliberately conservative: a relocated file is accepted
//! only when it is the single file of that name in its directory, entries
//! are processed strictly sequentially, and every failure stays confined to
//! its entry.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod library;
pub mod logging;
pub mod matcher;
pub mod model;
pub mod output;
pub mod report;
pub mod resolver;
pub mod search;
pub mod shutdown;
pub mod undo;
pub mod uniqueness;

pub use errors::RelinkError;
pub use model::{Entry, FieldChangeRecord, LinkedFile, FILE_FIELD};
pub use report::LinkFilesResult;
pub use resolver::{relink_all, relink_entry, RelinkOutcome};
pub use undo::RelinkCompound;
