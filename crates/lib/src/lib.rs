//! mkdist-lib: building blocks for the mkdist installer builder
//!
//! This crate provides the pieces the mkdist binaries sequence into a run:
//! - `target`: installer platforms and platform-flag resolution
//! - `prereq`: npm discovery, manifest and dependency checks
//! - `clean`: removal of previous build output
//! - `steps`: the application build and per-target installer commands
//! - `report`: discovery of produced installer artifacts
//!
//! Every external command goes through `runner`, which spawns argument
//! vectors directly (never a shell) and returns typed results.

pub mod clean;
pub mod error;
pub mod manifest;
pub mod prereq;
pub mod report;
pub mod runner;
pub mod steps;
pub mod target;

pub use error::{Error, Result};
