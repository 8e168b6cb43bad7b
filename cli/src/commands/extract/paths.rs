//! # Extract Command: Input and Output Locations
//!
//! File: cli/src/commands/extract/paths.rs
//!
//! ## Overview
//!
//! Validates the directory the mod JARs are read from and the directory assets are
//! written to. All of these checks are fatal: a run never starts against a location it
//! cannot read or write.
//!
//! ## Architecture
//!
//! - `validate_input`: exists, is a directory, listing can be opened.
//! - `validate_output`: parent exists and is writable, the output is not the input (or one
//!   of its ancestors), and an existing output is a writable directory. Reports whether
//!   the output already exists so the caller can decide about clearing it.
//! - `prepare_output`: clears an existing output and (re)creates it.
//! - `prompt_paths`: the interactive loop around the above. Validation errors are shown as
//!   `[ERROR] ...` and the question is asked again.
//!
use crate::common::fs::{io, paths};
use crate::common::ui::prompts::Prompter;
use crate::core::error::{ModAssetsError, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Validated locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    /// The output directory existed before the run and will be cleared.
    pub output_exists: bool,
}

/// Checks that `input` is a readable directory and returns its canonical form.
pub fn validate_input(input: &Path) -> Result<PathBuf> {
    if !input.exists() {
        return Err(ModAssetsError::InputNotFound {
            path: input.to_path_buf(),
        }
        .into());
    }
    if !input.is_dir() {
        return Err(ModAssetsError::NotADirectory {
            path: input.to_path_buf(),
        }
        .into());
    }
    io::check_readable_dir(input)?;
    Ok(input.canonicalize().unwrap_or_else(|_| input.to_path_buf()))
}

/// Checks that assets can be written to `output`. Returns `true` if it already exists.
///
/// `input` must be the canonical path returned by `validate_input`.
pub fn validate_output(output: &Path, input: &Path) -> Result<bool> {
    let parent = match output.parent() {
        Some(parent) if parent.is_dir() => parent,
        Some(parent) => {
            return Err(ModAssetsError::OutputParentMissing {
                path: parent.to_path_buf(),
            }
            .into())
        }
        None => {
            return Err(ModAssetsError::FileSystem(format!(
                "Output directory cannot be a filesystem root: {}",
                output.display()
            ))
            .into())
        }
    };
    io::check_writable_dir(parent)?;

    if !output.exists() {
        return Ok(false);
    }
    let canonical = output
        .canonicalize()
        .unwrap_or_else(|_| output.to_path_buf());
    if input.starts_with(&canonical) {
        return Err(ModAssetsError::FileSystem(format!(
            "Output directory must not be the input directory or contain it: {}",
            output.display()
        ))
        .into());
    }
    if !output.is_dir() {
        return Err(ModAssetsError::FileSystem(format!(
            "Output path exists but is not a directory: {}",
            output.display()
        ))
        .into());
    }
    io::check_writable_dir(output)?;
    Ok(true)
}

/// Default output location: `<input>/<default_output>`.
pub fn default_output(input: &Path, default_output: &str) -> PathBuf {
    input.join(default_output)
}

/// Clears an existing output directory (if `paths.output_exists`) and creates it.
pub fn prepare_output(paths: &ExtractPaths) -> Result<()> {
    if paths.output_exists {
        info!("Clearing existing output directory: {}", paths.output.display());
        io::clear_directory(&paths.output)?;
    }
    io::ensure_dir_exists(&paths.output)
}

/// Validates command-line locations without prompting.
pub fn resolve_batch_paths(
    input: &Path,
    output: Option<&Path>,
    default_name: &str,
) -> Result<ExtractPaths> {
    let input = validate_input(&paths::parse_user_path(&input.to_string_lossy())?)?;
    let output = match output {
        Some(output) => paths::parse_user_path(&output.to_string_lossy())?,
        None => default_output(&input, default_name),
    };
    let output_exists = validate_output(&output, &input)?;
    debug!(
        "Batch paths: input={:?}, output={:?}, exists={}",
        input, output, output_exists
    );
    Ok(ExtractPaths {
        input,
        output,
        output_exists,
    })
}

/// Asks for the input and output directories until both validate.
///
/// `prefill_input` / `prefill_output` become the defaults of the first question; after a
/// validation error the user has to type a value. Declining to clear an existing output
/// directory cancels the run. With `assume_yes` the clear confirmation is not asked.
pub fn prompt_paths<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prefill_input: Option<&Path>,
    prefill_output: Option<&Path>,
    default_name: &str,
    assume_yes: bool,
) -> Result<ExtractPaths> {
    let mut input_default = prefill_input.map(|p| p.to_string_lossy().into_owned());
    let input = loop {
        let raw = prompter
            .input_with_default("Input directory with mod JARs", input_default.as_deref())?;
        match paths::parse_user_path(&raw).and_then(|p| validate_input(&p)) {
            Ok(input) => break input,
            Err(e) => {
                prompter.say(&format!("[ERROR] {e:#}. Please try again."))?;
                input_default = None;
            }
        }
    };

    let mut output_default = prefill_output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(&input, default_name))
        .to_string_lossy()
        .into_owned();
    let (output, output_exists) = loop {
        let raw = prompter.input_with_default("Output directory", Some(output_default.as_str()))?;
        let checked = paths::parse_user_path(&raw)
            .and_then(|output| validate_output(&output, &input).map(|exists| (output, exists)));
        match checked {
            Ok(found) => break found,
            Err(e) => {
                prompter.say(&format!("[ERROR] {e:#}. Please try again."))?;
                output_default = default_output(&input, default_name)
                    .to_string_lossy()
                    .into_owned();
            }
        }
    };

    if output_exists && !assume_yes {
        let question = format!(
            "Output directory '{}' already exists and will be cleared. Continue?",
            output.display()
        );
        if !prompter.confirm(&question)? {
            return Err(ModAssetsError::Cancelled.into());
        }
    }

    Ok(ExtractPaths {
        input,
        output,
        output_exists,
    })
}
