//! # modassets Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for modassets, handling loading,
//! merging, validation, and access to configuration data. It supports a multi-level
//! configuration approach that combines defaults, user settings, and project-specific
//! overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.modassets.toml` in current directory or ancestors
//! 2. User-specific `<config dir>/modassets/config.toml`
//! 3. Default values defined in the code
//!
//! The defaults encode the JAR conventions the extraction engine relies on:
//! `assets/` selects extraction candidates, `.jar` marks (nested) archives,
//! and `META-INF/jars/` is the only part of `META-INF/` searched for
//! embedded archives.
//!
//! ## Examples
//!
//! ```toml
//! [extract]
//! nested_prefix = "dep_"
//! keep_asset_prefix = true
//!
//! [logging]
//! file = "~/logs/modassets.log"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let engine = Extractor::new(EngineOptions::from(&cfg.extract));
//! ```
//!
use crate::core::error::{ModAssetsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Effective configuration after merging project, user and default values.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub extract: ExtractConfig,
    pub logging: LoggingConfig,
}

/// Settings consumed by the extraction engine and the run driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Member path prefix selecting extraction candidates.
    pub asset_prefix: String,
    /// Extension (without dot) of top-level and nested archives.
    pub archive_extension: String,
    /// Metadata directory excluded from nested-archive discovery.
    pub metadata_root: String,
    /// Subpath of `metadata_root` holding legitimate embedded archives.
    pub embedded_archives: String,
    /// Output folder prefix for archives found at depth > 0.
    pub nested_prefix: String,
    /// Output folder name created inside the input directory when `--output` is omitted.
    pub default_output: String,
    /// Keep the `assets/` component in extracted paths.
    pub keep_asset_prefix: bool,
    /// Default for `--recursive`.
    pub recursive: bool,
}

/// Optional log-file settings.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Path of a debug-level log file (can use ~). Will be expanded.
    pub file: Option<String>,
}

/// One configuration file as written on disk. Every key is optional so that a value set
/// in a file (even one equal to the default) is distinguishable from an absent key.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    extract: ExtractFile,
    #[serde(default)]
    logging: LoggingConfig,
}

/// `[extract]` table of a configuration file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ExtractFile {
    asset_prefix: Option<String>,
    archive_extension: Option<String>,
    metadata_root: Option<String>,
    embedded_archives: Option<String>,
    nested_prefix: Option<String>,
    default_output: Option<String>,
    keep_asset_prefix: Option<bool>,
    recursive: Option<bool>,
}

fn default_asset_prefix() -> String {
    "assets/".to_string()
}
fn default_archive_extension() -> String {
    "jar".to_string()
}
fn default_metadata_root() -> String {
    "META-INF/".to_string()
}
fn default_embedded_archives() -> String {
    "META-INF/jars/".to_string()
}
fn default_nested_prefix() -> String {
    "nested_".to_string()
}
fn default_output_name() -> String {
    "extracted_assets".to_string()
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            asset_prefix: default_asset_prefix(),
            archive_extension: default_archive_extension(),
            metadata_root: default_metadata_root(),
            embedded_archives: default_embedded_archives(),
            nested_prefix: default_nested_prefix(),
            default_output: default_output_name(),
            keep_asset_prefix: false,
            recursive: false,
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".modassets.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config, project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "modassets") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

/// Walks from `start` up to the filesystem root (or the first `.git` directory)
/// looking for `.modassets.toml`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Layers the files over the defaults: a key set in the project file wins, then a key
/// set in the user file, then the built-in default.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default();
    let project = project.unwrap_or_default();
    let defaults = ExtractConfig::default();
    let (p, u) = (project.extract, user.extract);

    let extract = ExtractConfig {
        asset_prefix: p
            .asset_prefix
            .or(u.asset_prefix)
            .unwrap_or(defaults.asset_prefix),
        archive_extension: p
            .archive_extension
            .or(u.archive_extension)
            .unwrap_or(defaults.archive_extension),
        metadata_root: p
            .metadata_root
            .or(u.metadata_root)
            .unwrap_or(defaults.metadata_root),
        embedded_archives: p
            .embedded_archives
            .or(u.embedded_archives)
            .unwrap_or(defaults.embedded_archives),
        nested_prefix: p
            .nested_prefix
            .or(u.nested_prefix)
            .unwrap_or(defaults.nested_prefix),
        default_output: p
            .default_output
            .or(u.default_output)
            .unwrap_or(defaults.default_output),
        keep_asset_prefix: p
            .keep_asset_prefix
            .or(u.keep_asset_prefix)
            .unwrap_or(defaults.keep_asset_prefix),
        recursive: p.recursive.or(u.recursive).unwrap_or(defaults.recursive),
    };

    Config {
        extract,
        logging: LoggingConfig {
            file: project.logging.file.or(user.logging.file),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(file) = config.logging.file.as_mut() {
        *file = shellexpand::tilde(file.as_str()).into_owned();
        debug!("Expanded log file path: {}", file);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    let extract = &config.extract;
    let invalid = |msg: String| Err(anyhow!(ModAssetsError::Config(msg)));

    for (key, prefix) in [
        ("asset_prefix", &extract.asset_prefix),
        ("metadata_root", &extract.metadata_root),
        ("embedded_archives", &extract.embedded_archives),
    ] {
        if prefix.is_empty() || !prefix.ends_with('/') || prefix.starts_with('/') {
            return invalid(format!(
                "'{key}' must be a relative path ending with '/', got '{prefix}'."
            ));
        }
    }
    if !extract.embedded_archives.starts_with(&extract.metadata_root) {
        return invalid(format!(
            "'embedded_archives' ('{}') must lie under 'metadata_root' ('{}').",
            extract.embedded_archives, extract.metadata_root
        ));
    }
    if extract.archive_extension.is_empty() || extract.archive_extension.starts_with('.') {
        return invalid(format!(
            "'archive_extension' must be non-empty and given without a leading dot, got '{}'.",
            extract.archive_extension
        ));
    }
    for (key, name) in [
        ("nested_prefix", &extract.nested_prefix),
        ("default_output", &extract.default_output),
    ] {
        if name.is_empty() || name.contains(['/', '\\']) {
            return invalid(format!(
                "'{key}' must be a non-empty name without path separators, got '{name}'."
            ));
        }
    }
    if let Some(file) = &config.logging.file {
        if file.trim().is_empty() {
            return invalid("'logging.file' cannot be empty.".to_string());
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
