//! # Extract Command: Archive Discovery
//!
//! File: cli/src/commands/extract/scan.rs
//!
//! Finds the top-level archives of a run: regular files with the configured extension
//! (case-sensitive) directly in the input directory, or anywhere below it in recursive
//! mode. A symlink to a JAR counts as a JAR in both modes; symlinked directories are not
//! descended into. The output directory is never scanned. Results are sorted by path so
//! runs are reproducible.
//!
use crate::core::error::{ModAssetsError, Result};
use anyhow::Context;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
}

/// Lists archives with `extension` under `input`, skipping everything below `exclude`.
///
/// Returns `ModAssetsError::NoArchivesFound` when nothing matches.
pub fn find_archives(
    input: &Path,
    extension: &str,
    recursive: bool,
    exclude: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let mut archives = if recursive {
        scan_recursive(input, extension, exclude)
    } else {
        scan_flat(input, extension)?
    };
    archives.sort();
    debug!("Found {} archive(s) in {:?}", archives.len(), input);

    if archives.is_empty() {
        return Err(ModAssetsError::NoArchivesFound {
            extension: extension.to_string(),
            path: input.to_path_buf(),
        }
        .into());
    }
    Ok(archives)
}

fn scan_flat(input: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(input).with_context(|| format!("Failed to read directory {:?}", input))?;
    let mut archives = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {:?}", input))?
            .path();
        if path.is_file() && has_extension(&path, extension) {
            archives.push(path);
        }
    }
    Ok(archives)
}

fn scan_recursive(input: &Path, extension: &str, exclude: Option<&Path>) -> Vec<PathBuf> {
    WalkDir::new(input)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            exclude.map_or(true, |excluded| !entry.path().starts_with(excluded))
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable path during scan: {}", e);
                None
            }
        })
        // `Path::is_file` follows a symlinked JAR the same way the flat scan does.
        .filter(|entry| entry.path().is_file() && has_extension(entry.path(), extension))
        .map(|entry| entry.into_path())
        .collect()
}
