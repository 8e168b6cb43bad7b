//! # modassets Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the modassets
//! application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ModAssetsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover these domains:
//! - Configuration errors
//! - Filesystem errors
//! - Input/output directory validation (fatal, raised before any processing)
//! - Archive (ZIP/JAR) structural errors (local to a single archive)
//! - Path-safety violations of individual archive members (zip-slip)
//! - User cancellation from interactive prompts
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !path.is_dir() {
//!     return Err(ModAssetsError::NotADirectory { path: path.to_path_buf() })?;
//! }
//!
//! // Pattern matching on error types
//! match result {
//!     Err(e) if is_cancelled(&e) => {
//!         println!("Operation cancelled.");
//!     }
//!     other => other?,
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the modassets application.
#[derive(Error, Debug)]
pub enum ModAssetsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Input path does not exist: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("No read permission on: {}", path.display())]
    NotReadable { path: PathBuf },

    #[error("Output parent missing: {}", path.display())]
    OutputParentMissing { path: PathBuf },

    #[error("No write permission in: {}", path.display())]
    NotWritable { path: PathBuf },

    #[error("No '.{extension}' files found in {}", path.display())]
    NoArchivesFound { extension: String, path: PathBuf },

    #[error("Invalid or corrupt archive '{}': {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Unsafe member path '{member}': {reason}")]
    UnsafePath { member: String, reason: &'static str },

    #[error("{failed} archive(s) failed to process")]
    ArchivesFailed { failed: usize },

    #[error("Operation cancelled.")]
    Cancelled,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

/// Returns `true` when the error chain carries a user cancellation.
pub fn is_cancelled(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<ModAssetsError>()
            .is_some_and(|e| matches!(e, ModAssetsError::Cancelled))
    })
}
