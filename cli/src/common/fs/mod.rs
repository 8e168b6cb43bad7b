//! # modassets Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the extraction engine and the `extract` command.
//!
//! ## Architecture
//!
//! - **`io`**: Directory creation and clearing, permission checks, and content hashing.
//! - **`paths`**: Zip-slip safe resolution of archive member paths, and normalization of
//!   paths typed by the user.
//!
//! Callers import from the specific submodule (e.g., `crate::common::fs::io::ensure_dir_exists`).
//!

/// Basic I/O operations (e.g., `ensure_dir_exists`, `clear_directory`, `hash_file`).
pub mod io;
/// Path normalization and containment checks (e.g., `resolve_within`, `parse_user_path`).
pub mod paths;
