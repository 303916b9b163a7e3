//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the signal handler,
//! validates search roots, loads the library, runs the resolution pass, and
//! reports/persists the result.

use anyhow::{anyhow, Result};
use tracing::{debug, info};

use crate::cli::Args;
use crate::config::{self, Config, CONFIG_ENV};
use crate::logging::init_tracing;
use crate::output as out;
use crate::report::LinkFilesResult;
use crate::resolver::{self, RelinkOutcome};
use crate::undo::RelinkCompound;
use crate::{library, shutdown};

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}\n"));
            out::print_info(&format!(
                "To override, unset {CONFIG_ENV} or set it to another file."
            ));
            return Ok(());
        }
        match config::default_config_path() {
            Ok(p) => {
                out::print_info(&format!("Default bib_relink config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info("No config file exists there yet. Run without --print-config to create a template.");
                }
            }
            Err(e) => {
                out::print_error(&format!("Could not determine a default config path: {e}"));
            }
        }
        return Ok(());
    }

    // Create template config if none exists (before logging init). When the
    // user supplied --root directories we can still run without a config.
    if let Some(path) = config::ensure_default_config_exists() {
        out::print_success(&format!(
            "A template bib_relink config was written to: {}",
            path.display()
        ));
        if args.roots.is_empty() {
            out::print_info("Edit the file to set one or more <search_root> directories, then re-run. Example:\n\n<config>\n  <search_root>/path/to/library/files</search_root>\n  <log_level>normal</log_level>\n</config>\n");
            out::print_info(&format!(
                "To use a different location set {CONFIG_ENV}. Alternatively pass --root directly."
            ));
            return Ok(());
        }
    }

    // Build config (may read XML). CLI args override config values.
    let mut cfg: Config = config::xml::load_config()?.unwrap_or_default();
    args.apply_overrides(&mut cfg);

    // Initialize logging and hold the guard so file logs flush on exit.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    ctrlc::set_handler(|| {
        shutdown::request();
        eprintln!("Received interrupt; finishing the current entry before stopping...");
    })?;

    debug!("Starting bib_relink: {:?}", args);

    cfg.validate()?;

    let library_path = args
        .library
        .as_deref()
        .ok_or_else(|| anyhow!("no library file given"))?;
    let mut entries = library::load_library(library_path)?;
    info!(
        entries = entries.len(),
        roots = cfg.search_roots.len(),
        "Starting resolution pass"
    );

    let outcomes = resolver::relink_all(
        &mut entries,
        &cfg.search_roots,
        shutdown::is_requested,
        |linked, entry| {
            debug!(key = %entry.key, link = %linked.link, "Staged relinked file");
        },
    );

    // Stage every field edit into one undoable compound before reducing.
    let mut compound = RelinkCompound::new("Relink moved files");
    for (_, outcome) in &outcomes {
        if let RelinkOutcome::Relinked { change, .. } = outcome {
            compound.push(change.clone());
        }
    }

    let result = LinkFilesResult::reduce(outcomes);

    if shutdown::is_requested() {
        out::print_warn("Pass was interrupted; results below cover the entries processed so far.");
    }

    if result.has_exceptions() {
        out::print_warn(&result.summary());
    } else if result.has_changes() {
        out::print_success(&result.summary());
    } else {
        out::print_user(&result.summary());
    }

    if compound.has_edits() {
        debug!(
            edits = compound.records().len(),
            "Staged undo compound '{}'",
            compound.name()
        );
    }

    if result.has_changes() {
        if cfg.dry_run {
            out::print_info(&format!(
                "Dry-run: library '{}' not written; {} entr{} would change.",
                library_path.display(),
                result.changed.len(),
                if result.changed.len() == 1 { "y" } else { "ies" }
            ));
        } else {
            library::save_library(library_path, &entries)?;
            info!(path = %library_path.display(), "Library updated");
        }
    }

    Ok(())
}
