//! # modassets Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the modassets CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Loading the layered TOML configuration
//! - Setting up the logging system (console verbosity plus an optional log file)
//! - Routing execution to the command handler
//!
//! ## Architecture
//!
//! - Each top-level command is a variant in the `Commands` enum, mapped to a handler in
//!   `commands::`
//! - The extraction engine itself lives in `core::engine`; shared helpers in `common::`
//! - All errors are propagated to this level, printed once, and turned into exit status 1
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! modassets --help
//!
//! # Guided extraction
//! modassets extract
//!
//! # Batch extraction with debug output and a log file
//! modassets -v --log-file ~/logs/modassets.log x -i ./mods -o ./assets
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Load configuration (project `.modassets.toml`, user config, defaults) with console
//!    logging already active
//! 3. Configure logging based on verbosity flags and the log file setting
//! 4. Route to the command handler
//! 5. Format and display any errors that occur
//!
use anyhow::Context;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, registry::LookupSpan, EnvFilter, Layer};

mod commands; // Command handlers (extract).
mod common; // Shared utilities (archive, fs, ui).
mod core; // Core infrastructure (config, engine, errors).

use crate::core::error::{is_cancelled, Result};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "modassets",
    about = "modassets: extract the assets/ tree from Minecraft mod JARs",
    long_about = "Extracts textures, models, sounds and language files from mod JARs,\n\
                  including the JAR libraries bundled inside them (META-INF/jars/).",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase console verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only show warnings and errors on the console.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Also write a debug-level log to this file.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Extract assets from every mod JAR in a directory.
    #[command(alias = "x")]
    Extract(commands::extract::ExtractArgs),
}

fn console_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Compact stderr layer. `RUST_LOG` overrides the level picked by `-v` / `-q`.
fn console_layer<S>(verbose: u8, quiet: bool) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level(verbose, quiet)));
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .with_filter(console_filter)
}

/// Installs the global subscriber: a compact stderr layer, plus a plain-text file layer
/// at debug level when `log_file` is set.
fn init_logging(verbose: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {

    let file_layer = match &log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {:?}", parent))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer(verbose, quiet))
        .with(file_layer)
        .init();

    if let Some(path) = log_file {
        tracing::info!("Logging to file: {}", path.display());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    // The log file may come from the configuration, so config loading only gets the
    // console layer, scoped to this call.
    let config = tracing::subscriber::with_default(
        tracing_subscriber::registry().with(console_layer(cli.verbose, cli.quiet)),
        crate::core::config::load_config,
    )?;

    let log_file = cli.log_file.or_else(|| config.logging.file.as_ref().map(PathBuf::from));
    init_logging(cli.verbose, cli.quiet, log_file)?;
    tracing::debug!("Effective configuration: {:?}", config);

    match cli.command {
        Commands::Extract(args) => commands::extract::handle_extract(args, &config),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if is_cancelled(&e) {
            eprintln!("\nOperation cancelled.");
        } else {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
