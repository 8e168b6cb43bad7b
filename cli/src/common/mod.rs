//! # modassets Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Root of the shared utility modules. Command handlers (`commands::`) and the extraction
//! engine (`core::engine`) build on these instead of touching archives, the filesystem or
//! the terminal directly.
//!
//! ## Architecture
//!
//! - **`archive`**: Opening JAR/ZIP containers and classifying their members (asset,
//!   nested archive, ignored).
//! - **`fs`**: Directory handling, permission checks, hashing, and zip-slip safe path
//!   resolution.
//! - **`ui`**: Interactive prompts with injectable input and output.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::jar::{ArchiveRef, JarArchive};
//! use crate::common::fs::{io, paths};
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let mut jar = JarArchive::open(&ArchiveRef::from_path(Path::new("mods/mod_a.jar")))?;
//! io::ensure_dir_exists(Path::new("out/mod_a"))?;
//! let base = Path::new("out/mod_a").canonicalize()?;
//! let destination = paths::resolve_within(&base, "textures/x.png")?;
//! jar.copy_member_to("assets/textures/x.png", &destination)?;
//! # Ok(())
//! # }
//! ```
//!

/// JAR/ZIP container access and member classification.
pub mod archive;
/// Filesystem operations and path safety.
pub mod fs;
/// Terminal prompts.
pub mod ui;
