//! # Archive Member Selection (`common::archive::members`)
//!
//! File: cli/src/common/archive/members.rs
//!
//! ## Overview
//!
//! Member paths inside a JAR are POSIX-style, forward-slash delimited relative paths.
//! Two questions are asked of every member name and both are answered here, without
//! touching the archive itself:
//!
//! - Is it an **asset**? Names starting with the literal prefix `assets/`.
//! - Is it a **nested archive**? Names ending in `.jar`, except those inside the
//!   `META-INF/` metadata root. The one exception to the exception is `META-INF/jars/`,
//!   where loaders such as Fabric bundle their embedded library JARs.
//!
use crate::core::config::ExtractConfig;

/// Name-based rules deciding which archive members are extracted or recursed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPolicy {
    asset_prefix: String,
    archive_suffix: String,
    metadata_root: String,
    embedded_archives: String,
}

impl Default for MemberPolicy {
    fn default() -> Self {
        Self::from(&ExtractConfig::default())
    }
}

impl From<&ExtractConfig> for MemberPolicy {
    fn from(config: &ExtractConfig) -> Self {
        Self {
            asset_prefix: config.asset_prefix.clone(),
            archive_suffix: format!(".{}", config.archive_extension),
            metadata_root: config.metadata_root.clone(),
            embedded_archives: config.embedded_archives.clone(),
        }
    }
}

impl MemberPolicy {
    /// The member prefix selecting extraction candidates (`assets/` by default).
    pub fn asset_prefix(&self) -> &str {
        &self.asset_prefix
    }

    pub fn is_asset(&self, name: &str) -> bool {
        name.starts_with(&self.asset_prefix)
    }

    /// A nested archive ends in the archive suffix and is either outside the metadata
    /// root or inside its embedded-archives subpath.
    pub fn is_nested_archive(&self, name: &str) -> bool {
        name.ends_with(&self.archive_suffix)
            && (!name.starts_with(&self.metadata_root) || name.starts_with(&self.embedded_archives))
    }

    pub fn asset_members<'a>(&self, names: &'a [String]) -> Vec<&'a str> {
        names
            .iter()
            .map(String::as_str)
            .filter(|name| self.is_asset(name))
            .collect()
    }

    pub fn nested_archives<'a>(&self, names: &'a [String]) -> Vec<&'a str> {
        names
            .iter()
            .map(String::as_str)
            .filter(|name| self.is_nested_archive(name))
            .collect()
    }

    /// Path of an asset member relative to the extraction target.
    ///
    /// With `keep_prefix` the full member path is used (`assets/textures/x.png`),
    /// otherwise the asset prefix is dropped (`textures/x.png`).
    pub fn asset_relative_path<'a>(&self, name: &'a str, keep_prefix: bool) -> &'a str {
        if keep_prefix {
            name
        } else {
            name.strip_prefix(self.asset_prefix.as_str()).unwrap_or(name)
        }
    }
}

/// File name used when a nested member is copied into its scratch directory.
///
/// Path separators become underscores so distinct members never map to the same file.
pub fn materialized_name(member: &str) -> String {
    member.replace(['/', '\\'], "_")
}

/// Display stem of a nested member: its last path segment without the extension.
pub fn member_stem(member: &str) -> String {
    let file_name = member
        .trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(member);
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => file_name[..dot].to_string(),
        _ => file_name.to_string(),
    }
}
