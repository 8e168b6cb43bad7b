//! # modassets Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the modassets CLI so `main.rs` can
//! route parsed arguments to them.
//!
//! ## Commands
//!
//! - `extract`: Recursive asset extraction from a directory of mod JARs
//!
//! Each command defines its own arguments structure and handler function.
//!

/// The `extract` command (alias `x`): validates locations, scans for JARs, runs the engine.
pub mod extract;
