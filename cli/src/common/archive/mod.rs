//! # modassets Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module serves as the main interface and organizational unit for archive-related
//! utilities. Mod archives are ZIP containers (`.jar`), the only format modassets reads.
//!
//! ## Architecture
//!
//! - **`jar`**: Opening a JAR/ZIP file (`JarArchive`), naming it (`ArchiveRef`), and copying
//!   individual members out to disk.
//! - **`members`**: Pure selection rules over member names (`MemberPolicy`): which entries are
//!   asset candidates and which are nested archives worth descending into.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{jar::{ArchiveRef, JarArchive}, members::MemberPolicy};
//!
//! let archive = ArchiveRef::from_path(Path::new("mods/mod_a.jar"));
//! let jar = JarArchive::open(&archive)?;
//! let names = jar.member_names();
//! let assets = MemberPolicy::default().asset_members(&names);
//! ```
//!

/// Opening JAR/ZIP containers and copying members to disk.
pub mod jar;
/// Member-name selection rules (assets, nested archives).
pub mod members;
