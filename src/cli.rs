//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - `--root` directories are appended after the config file's search roots,
//!   preserving order on both sides.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};

/// Relink moved or missing attachment files referenced by library entries.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Relink moved attachment files for a bibliography library")]
pub struct Args {
    /// Library XML file to process.
    #[arg(value_name = "LIBRARY", value_hint = ValueHint::FilePath, required_unless_present = "print_config")]
    pub library: Option<PathBuf>,

    /// Extra directory to search for relocated files (repeatable; searched
    /// after the config file's roots, in the order given).
    #[arg(
        long = "root",
        short = 'r',
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Additional search root (repeatable)"
    )]
    pub roots: Vec<PathBuf>,

    /// Resolve and report, but do not write the library back.
    #[arg(long, help = "Show what would change, but do not persist the library")]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Log to this file in addition to stdout.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath, help = "Write logs to a file as well")]
    pub log_file: Option<PathBuf>,

    /// Print where bib_relink will look for the config file (or
    /// BIB_RELINK_CONFIG if set), then exit.
    #[arg(long, help = "Print the config file location used by bib_relink and exit")]
    pub print_config: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and
    /// structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset
    /// flags; --root appends rather than replaces.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        cfg.search_roots.extend(self.roots.iter().cloned());
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
