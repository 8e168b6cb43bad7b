//! # JAR Archive Access (`common::archive::jar`)
//!
//! File: cli/src/common/archive/jar.rs
//!
//! ## Overview
//!
//! Thin wrapper around `zip::ZipArchive` for reading mod JARs from disk.
//!
//! - `ArchiveRef` names an archive on disk: its location plus the display stem used for
//!   log lines and output folder names. Nested archives are materialized to scratch files
//!   with mangled names, so their stem comes from the original member name instead.
//! - `JarArchive` opens the container once and copies individual members out, either to
//!   their extraction destination or to a scratch file for recursion.
//!
//! Opening failures are reported as `ModAssetsError::Archive`, which the extraction engine
//! treats as a failure local to that one archive.
//!
use crate::common::archive::members;
use crate::common::fs::io;
use crate::core::error::{ModAssetsError, Result};
use anyhow::Context;
use std::fs::File;
use std::path::{Path, PathBuf};

/// A compressed container on disk plus its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRef {
    pub path: PathBuf,
    pub stem: String,
}

impl ArchiveRef {
    /// Top-level archive: the stem is the file name without extension.
    pub fn from_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            path: path.to_path_buf(),
            stem,
        }
    }

    /// Nested archive materialized at `path` from archive member `member`.
    pub fn nested(path: &Path, member: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            stem: members::member_stem(member),
        }
    }

    /// File name shown in the processing trace.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.stem.clone())
    }
}

/// An opened JAR/ZIP container.
pub struct JarArchive {
    path: PathBuf,
    inner: zip::ZipArchive<File>,
}

impl JarArchive {
    /// Opens `archive` and reads its central directory.
    pub fn open(archive: &ArchiveRef) -> Result<Self> {
        let file = File::open(&archive.path)
            .with_context(|| format!("Failed to open archive {:?}", archive.path))?;
        let inner = zip::ZipArchive::new(file).map_err(|source| ModAssetsError::Archive {
            path: archive.path.clone(),
            source,
        })?;
        Ok(Self {
            path: archive.path.clone(),
            inner,
        })
    }

    /// Member names in central-directory order.
    pub fn member_names(&self) -> Vec<String> {
        self.inner.file_names().map(str::to_owned).collect()
    }

    /// Copies the decompressed bytes of `member` to `destination`, creating parent
    /// directories as needed. Returns the number of bytes written.
    pub fn copy_member_to(&mut self, member: &str, destination: &Path) -> Result<u64> {
        let mut entry = self
            .inner
            .by_name(member)
            .map_err(|source| ModAssetsError::Archive {
                path: self.path.clone(),
                source,
            })
            .with_context(|| format!("Failed to read member '{member}'"))?;

        if let Some(parent) = destination.parent() {
            io::ensure_dir_exists(parent)?;
        }
        let mut out = File::create(destination)
            .with_context(|| format!("Failed to create file {:?}", destination))?;
        match std::io::copy(&mut entry, &mut out) {
            Ok(written) => Ok(written),
            Err(e) => {
                drop(out);
                // Never leave a truncated member behind.
                let _ = std::fs::remove_file(destination);
                Err(e).with_context(|| {
                    format!("Failed to write member '{member}' to {:?}", destination)
                })
            }
        }
    }
}
