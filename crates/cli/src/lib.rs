//! Shared output and prompt helpers for the mkdist binaries.

pub mod output;
pub mod prompts;
