//! Config validation logic.
//! Checks search roots up front so a typo'd directory is reported once at
//! startup instead of once per entry during the pass.

use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::types::Config;

impl Config {
    /// Drop unusable search roots (missing, not a directory, unreadable)
    /// with a warning, dedupe roots that resolve to the same directory, and
    /// fail only when nothing searchable remains.
    ///
    /// A root can still become unreadable between validation and the walk;
    /// that surfaces later as a per-entry search failure.
    pub fn validate(&mut self) -> Result<()> {
        if self.search_roots.is_empty() {
            bail!("no search roots configured; add <search_root> to the config or pass --root");
        }

        let mut kept: Vec<PathBuf> = Vec::with_capacity(self.search_roots.len());
        let mut seen: Vec<PathBuf> = Vec::new();

        for root in self.search_roots.drain(..) {
            if !root.is_dir() {
                warn!(
                    root = %root.display(),
                    "Search root missing or not a directory; skipping"
                );
                continue;
            }
            if let Err(e) = fs::read_dir(&root) {
                warn!(root = %root.display(), error = %e, "Search root unreadable; skipping");
                continue;
            }

            let real = dunce::canonicalize(&root).unwrap_or_else(|_| root.clone());
            if seen.contains(&real) {
                debug!(root = %root.display(), "Duplicate search root; keeping first occurrence");
                continue;
            }
            seen.push(real);
            kept.push(root);
        }

        if kept.is_empty() {
            bail!("none of the configured search roots are usable directories");
        }

        self.search_roots = kept;
        info!(
            roots = self.search_roots.len(),
            "Config validated: {} search root(s)",
            self.search_roots.len()
        );
        Ok(())
    }
}
