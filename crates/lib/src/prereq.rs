//! Toolchain prerequisite checks.
//!
//! The builder needs npm on PATH, a project manifest, and installed
//! dependencies before any build step can run.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::runner::Runner;

/// Candidate executable names for the package manager, in preference order.
#[cfg(windows)]
const NPM_CANDIDATES: [&str; 2] = ["npm.cmd", "npm"];
#[cfg(not(windows))]
const NPM_CANDIDATES: [&str; 1] = ["npm"];

/// Directory whose presence marks installed dependencies.
pub const NODE_MODULES_DIR: &str = "node_modules";

/// A resolved npm executable.
#[derive(Debug, Clone)]
pub struct Npm {
  program: PathBuf,
  version: String,
}

impl Npm {
  pub fn new(program: impl Into<PathBuf>, version: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      version: version.into(),
    }
  }

  /// Locate npm on PATH and confirm it responds to `--version`.
  pub async fn locate(runner: &Runner) -> Result<Self> {
    for candidate in NPM_CANDIDATES {
      let program = match which::which(candidate) {
        Ok(program) => program,
        Err(e) => {
          debug!(candidate, error = %e, "package manager candidate not on PATH");
          continue;
        }
      };

      match runner.capture(&program, &["--version"], "npm version probe").await {
        Ok(output) => {
          let version = output.stdout.trim().to_string();
          info!(program = %program.display(), version, "found npm");
          return Ok(Self { program, version });
        }
        Err(e) => {
          warn!(program = %program.display(), error = %e, "npm candidate failed to run");
        }
      }
    }

    Err(Error::ToolNotFound {
      tool: "npm".to_string(),
    })
  }

  pub fn program(&self) -> &Path {
    &self.program
  }

  pub fn version(&self) -> &str {
    &self.version
  }
}

/// Whether the dependency install marker directory exists.
pub fn dependencies_installed(project_root: &Path) -> bool {
  project_root.join(NODE_MODULES_DIR).exists()
}

/// Run `npm install` in the project root.
pub async fn install_dependencies(runner: &Runner, npm: &Npm) -> Result<()> {
  runner.run(npm.program(), &["install"], "dependency install").await?;
  Ok(())
}
