//! # modassets CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`main_tests.rs`, `extract.rs`).
//!
//! Each `.rs` file in `cli/tests/` (that isn't a module like this one) is compiled as a
//! separate test crate that runs the compiled `modassets` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs::File;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;

/// # Get modassets Command (`modassets_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `modassets` binary, isolated from the
/// caller's environment: `MODASSETS_*` and `RUST_LOG` are removed and the user
/// configuration directory points at `config_home`, which holds no config file.
///
/// ## Panics
/// Panics if the `modassets` binary cannot be found via `Command::cargo_bin`.
pub fn modassets_cmd(config_home: &Path) -> Command {
    let mut cmd =
        Command::cargo_bin("modassets").expect("Failed to find modassets binary for testing");
    cmd.env_remove("MODASSETS_INPUT")
        .env_remove("MODASSETS_OUTPUT")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .current_dir(config_home);
    cmd
}

/// Builds JAR bytes from `(name, bytes)` pairs in the given order.
pub fn jar_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        writer.write_all(data).expect("Failed to write zip entry");
    }
    writer.finish().expect("Failed to finish zip").into_inner()
}

/// Writes a JAR at `path` from `(name, bytes)` pairs.
pub fn write_jar(path: &Path, entries: &[(&str, &[u8])]) {
    File::create(path)
        .and_then(|mut f| f.write_all(&jar_bytes(entries)))
        .expect("Failed to write test JAR");
}
