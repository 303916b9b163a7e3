//! Typed error definitions for bib_relink.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelinkError {
    #[error("Cannot list directory '{path}': {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot walk search root '{root}': {source}")]
    WalkRoot {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Stored file reference has no file name component: {0}")]
    NoFileName(PathBuf),

    #[error("Candidate path has no parent directory: {0}")]
    NoParent(PathBuf),
}
