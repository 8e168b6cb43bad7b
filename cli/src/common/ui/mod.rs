//! # modassets UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction for the interactive extraction mode. Batch runs never touch this
//! module; everything they report goes through `tracing` and the final summary.
//!
//! - **`prompts`**: yes/no confirmations and text input with defaults (`Prompter`).
//!

/// Line-based prompts over any reader/writer pair.
pub mod prompts;
