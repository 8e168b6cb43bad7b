//! # Path Resolution and Zip-Slip Protection (`common::fs::paths`)
//!
//! File: cli/src/common/fs/paths.rs
//!
//! ## Overview
//!
//! Archive contents are untrusted input. Before an archive member is written, its
//! destination is resolved against the extraction directory and rejected unless it stays
//! inside it. This module owns that check, plus the normalization of paths typed (or
//! dragged in) by a user.
//!
//! ## Architecture
//!
//! `resolve_within` runs in two stages:
//! 1. **Lexical**: backslashes are treated as separators, `.` is dropped, `..` pops a
//!    component, and root/prefix components reject the member outright. The result must
//!    still start with the base directory, compared component-wise.
//! 2. **On disk**: the deepest already-existing ancestor of the destination is
//!    canonicalized, which follows any symlinks, and must land under the canonical base.
//!    This stops a symlinked directory inside the output tree from redirecting writes.
//!
use crate::core::error::{ModAssetsError, Result};
use anyhow::Context;
use std::path::{Component, Path, PathBuf};

/// Resolves archive member path `relative` under `base`.
///
/// `base` must already be canonical (see `Path::canonicalize`). Returns the destination
/// path, or `ModAssetsError::UnsafePath` when the member would land outside `base`.
pub fn resolve_within(
    base: &Path,
    relative: &str,
) -> std::result::Result<PathBuf, ModAssetsError> {
    let unsafe_path = |reason| ModAssetsError::UnsafePath {
        member: relative.to_string(),
        reason,
    };

    let normalized = relative.replace('\\', "/");
    let mut resolved = base.to_path_buf();
    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(unsafe_path("absolute path"));
            }
        }
    }

    if !resolved.starts_with(base) {
        return Err(unsafe_path("escapes the extraction directory"));
    }

    let anchor = resolved
        .ancestors()
        .find(|p| p.symlink_metadata().is_ok())
        .unwrap_or(base);
    match anchor.canonicalize() {
        Ok(real) if real.starts_with(base) => Ok(resolved),
        Ok(_) => Err(unsafe_path("resolves through a symlink outside the extraction directory")),
        Err(_) => Err(unsafe_path("resolves through a dangling symlink")),
    }
}

/// Normalizes a path entered by the user.
///
/// Surrounding whitespace and one pair of matching quotes are stripped (file managers
/// quote dragged-in paths), `~` is expanded, relative paths are made absolute against the
/// current directory, and existing paths are canonicalized.
pub fn parse_user_path(raw: &str) -> Result<PathBuf> {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);
    let expanded = PathBuf::from(shellexpand::tilde(unquoted).into_owned());

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(expanded)
    };
    Ok(absolute.canonicalize().unwrap_or(absolute))
}
