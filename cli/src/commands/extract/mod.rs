//! # modassets Extract Command
//!
//! File: cli/src/commands/extract/mod.rs
//!
//! ## Overview
//!
//! Entry point for `modassets extract` (alias `x`). Pulls the `assets/` tree out of every
//! mod JAR in a directory, including JARs bundled inside other JARs, into one output
//! directory:
//!
//! ```text
//! <output>/<mod stem>/...        assets of each top-level JAR
//! <output>/nested_<stem>/...     assets of every bundled JAR, at any depth
//! ```
//!
//! ## Architecture
//!
//! - `paths.rs`: input/output validation, output clearing, and the interactive path prompts
//! - `scan.rs`: discovery of the top-level archives
//! - `run.rs`: the per-run loop over the archives and the final summary
//!
//! The command runs in one of two modes:
//! - **Interactive** (`--interactive`, or no `--input`): asks for the directories (any
//!   command-line values become the defaults), confirms clearing an existing output
//!   directory, shows the archive count and asks before extracting. `--yes` answers both
//!   confirmations up front, so only the directory questions remain.
//! - **Batch** (`--input` given): never prompts; an existing output directory is cleared.
//!
//! ## Examples
//!
//! ```bash
//! # Guided mode
//! modassets extract
//!
//! # Batch mode with the default output (<input>/extracted_assets)
//! modassets extract --input ~/.minecraft/mods
//!
//! # Scan subfolders too, and fail the process if any JAR is broken
//! modassets x -i ./modpack -o ./assets -r --fail-on-error
//! ```
//!
use crate::common::ui::prompts::Prompter;
use crate::core::config::Config;
use crate::core::engine::{EngineOptions, Tally};
use crate::core::error::{ModAssetsError, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Input/output validation and the interactive path prompts.
pub mod paths;
/// Run loop and summary.
pub mod run;
/// Top-level archive discovery.
pub mod scan;

/// # Extract Command Arguments (`ExtractArgs`)
///
/// Command-line arguments for `modassets extract`. Every option is optional; without
/// `--input` the command falls back to interactive prompting.
#[derive(Parser, Debug, Default, Clone)]
pub struct ExtractArgs {
    /// Directory containing the mod JAR files.
    #[arg(short, long, env = "MODASSETS_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory the assets are written to. Defaults to `<input>/extracted_assets`.
    /// An existing directory is cleared before extraction.
    #[arg(short, long, env = "MODASSETS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Also look for JAR files in subdirectories of the input directory.
    #[arg(short, long)]
    pub recursive: bool,

    /// Prompt for directories and confirmations even when `--input` is given.
    #[arg(long)]
    pub interactive: bool,

    /// Answer yes to the clear-output and proceed confirmations. Requires `--input`.
    /// Without `--interactive` this is batch mode, which never asks anyway.
    #[arg(short, long, requires = "input")]
    pub yes: bool,

    /// Exit with a non-zero status if any archive failed to process.
    #[arg(long)]
    pub fail_on_error: bool,
}

impl ExtractArgs {
    /// Interactive unless `--input` was given without `--interactive`.
    pub fn is_interactive(&self) -> bool {
        self.interactive || self.input.is_none()
    }
}

/// # Handle Extract Command (`handle_extract`)
///
/// Validates the locations, finds the archives, runs the extraction, and turns the final
/// tally into the command result.
///
/// ## Returns
///
/// * `Ok(())` when the run completed, even if individual archives failed (unless
///   `--fail-on-error` was given).
/// * `Err` for fatal problems (invalid input/output, no archives, cancellation), or
///   `ModAssetsError::ArchivesFailed` with `--fail-on-error`.
pub fn handle_extract(args: ExtractArgs, config: &Config) -> Result<()> {
    debug!("Handling extract command with args: {:?}", args);

    let tally = if args.is_interactive() {
        let mut prompter = Prompter::stdio();
        run_interactive(&mut prompter, &args, config)?
    } else {
        run_batch(&args, config)?
    };

    if args.fail_on_error && tally.failed > 0 {
        return Err(ModAssetsError::ArchivesFailed {
            failed: tally.failed,
        }
        .into());
    }
    Ok(())
}

fn recursive(args: &ExtractArgs, config: &Config) -> bool {
    args.recursive || config.extract.recursive
}

fn run_batch(args: &ExtractArgs, config: &Config) -> Result<Tally> {
    let input = args.input.as_deref().ok_or_else(|| {
        ModAssetsError::Config("--input is required in batch mode".to_string())
    })?;
    let resolved = paths::resolve_batch_paths(
        input,
        args.output.as_deref(),
        &config.extract.default_output,
    )?;
    let archives = scan::find_archives(
        &resolved.input,
        &config.extract.archive_extension,
        recursive(args, config),
        Some(resolved.output.as_path()),
    )?;
    info!("Found {} JAR(s) in {}", archives.len(), resolved.input.display());

    paths::prepare_output(&resolved)?;
    let options = EngineOptions::from(&config.extract);
    Ok(run::run_extraction(&archives, &resolved.output, options))
}

/// Interactive flow over an arbitrary prompter.
pub fn run_interactive<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    args: &ExtractArgs,
    config: &Config,
) -> Result<Tally> {
    prompter.say("=== modassets: Mod Asset Extractor ===")?;
    prompter.say("Extracts the assets of every mod JAR (and the JARs bundled inside them).")?;
    prompter.say("Tip: you can drag a folder into the terminal to paste its path.")?;
    prompter.say("")?;

    let resolved = paths::prompt_paths(
        prompter,
        args.input.as_deref(),
        args.output.as_deref(),
        &config.extract.default_output,
        args.yes,
    )?;
    let archives = scan::find_archives(
        &resolved.input,
        &config.extract.archive_extension,
        recursive(args, config),
        Some(resolved.output.as_path()),
    )?;

    prompter.say(&format!("Found {} JAR(s).", archives.len()))?;
    if !args.yes && !prompter.confirm("Proceed?")? {
        return Err(ModAssetsError::Cancelled.into());
    }

    paths::prepare_output(&resolved)?;
    let options = EngineOptions::from(&config.extract);
    Ok(run::run_extraction(&archives, &resolved.output, options))
}
