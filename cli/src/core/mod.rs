//! # modassets Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core components of modassets: configuration, error types,
//! and the recursive extraction engine itself.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `engine`: Recursive asset extraction with dedup, zip-slip protection and failure isolation
//! - `error`: Error types and error handling utilities
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::engine::{EngineOptions, Extractor}; // For running extractions
//! use crate::core::error::{ModAssetsError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod engine;
pub mod error;
