//! # Extract Command: Run Driver
//!
//! File: cli/src/commands/extract/run.rs
//!
//! ## Overview
//!
//! Drives one extraction run over an already validated list of top-level archives: a
//! single `Extractor` is built per run, each archive is processed at depth 0, and the
//! outcomes are tallied and summarized.
//!
//! Per-archive failures never stop the loop. Whether they affect the exit status is
//! decided by the caller (`--fail-on-error`).
//!
use crate::core::engine::{EngineOptions, Extractor, Tally};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Processes `archives` in order into `output` and prints the summary.
pub fn run_extraction(archives: &[PathBuf], output: &Path, options: EngineOptions) -> Tally {
    let mut extractor = Extractor::new(options);
    let total = archives.len();

    for (index, archive) in archives.iter().enumerate() {
        info!("--- Processing {}/{} ---", index + 1, total);
        extractor.process_top_level(archive, output);
    }

    let tally = extractor.tally();
    print_summary(&tally, output);
    tally
}

fn print_summary(tally: &Tally, output: &Path) {
    println!();
    println!("Extraction completed.");
    println!("Successful: {}", tally.succeeded);
    println!("Failed: {}", tally.failed);
    println!("Assets saved to: {}", output.display());
    if tally.failed > 0 {
        warn!("{} archive(s) could not be processed; see the log above.", tally.failed);
    }
}
