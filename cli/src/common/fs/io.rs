//! # modassets Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output operations required by the
//! extraction engine and the run driver. It provides wrappers around `std::fs` with
//! consistent error context.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) unless it already exists;
//!   errors if the path exists but is not a directory.
//! - **`clear_directory`**: Removes an existing output directory with `fs_extra`, so every
//!   run starts from an empty output.
//! - **`check_readable_dir`** / **`check_writable_dir`**: Up-front permission checks used
//!   when validating the input and output locations.
//! - **`hash_file`**: BLAKE3 digest of a file's bytes, used to recognise nested copies of
//!   an archive that was already processed.
//!
use crate::core::error::{ModAssetsError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory, including any
/// necessary parent directories (similar to `mkdir -p`). If the path already exists
/// but is not a directory, `ModAssetsError::FileSystem` is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        debug!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ModAssetsError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Removes `path` and everything below it. Missing paths are not an error.
pub fn clear_directory(path: &Path) -> Result<()> {
    fs_extra::dir::remove(path).map_err(|e| {
        anyhow::anyhow!(e).context(format!("Failed to clear directory {:?}", path))
    })?;
    debug!("Cleared directory: {:?}", path);
    Ok(())
}

/// Fails with `ModAssetsError::NotReadable` unless the directory listing can be opened.
pub fn check_readable_dir(path: &Path) -> Result<()> {
    fs::read_dir(path).map_err(|e| {
        debug!("Read check failed for {:?}: {}", path, e);
        ModAssetsError::NotReadable {
            path: path.to_path_buf(),
        }
    })?;
    Ok(())
}

/// Fails with `ModAssetsError::NotWritable` unless a file can be created in `path`.
///
/// The check file is anonymous and disappears when dropped.
pub fn check_writable_dir(path: &Path) -> Result<()> {
    tempfile::tempfile_in(path).map_err(|e| {
        debug!("Write check failed for {:?}: {}", path, e);
        ModAssetsError::NotWritable {
            path: path.to_path_buf(),
        }
    })?;
    Ok(())
}

/// BLAKE3 digest of the file at `path`.
pub fn hash_file(path: &Path) -> Result<blake3::Hash> {
    let mut file =
        fs::File::open(path).with_context(|| format!("Failed to open {:?} for hashing", path))?;
    let mut hasher = blake3::Hasher::new();
    std::io::copy(&mut file, &mut hasher)
        .with_context(|| format!("Failed to read {:?} for hashing", path))?;
    Ok(hasher.finalize())
}
