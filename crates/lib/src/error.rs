//! Error types for mkdist-lib.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while driving the packaging toolchain.
#[derive(Debug, Error)]
pub enum Error {
  #[error("`{tool}` not found on PATH; install Node.js (which provides npm) from https://nodejs.org")]
  ToolNotFound { tool: String },

  #[error("package.json not found at {}; run from the project root or pass --project-root", .path.display())]
  ManifestMissing { path: PathBuf },

  #[error("failed to parse {}: {message}", .path.display())]
  ManifestInvalid { path: PathBuf, message: String },

  #[error("{description} failed{}", exit_suffix(.code))]
  CommandFailed {
    description: String,
    code: Option<i32>,
    stdout: String,
    stderr: String,
  },

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!(" (exit code {code})"),
    None => String::from(" (terminated by signal)"),
  }
}
