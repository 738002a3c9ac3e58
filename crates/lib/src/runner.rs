//! Spawning of toolchain commands.
//!
//! Every external invocation goes through [`Runner`]: argument vectors only
//! (no shell interpretation), the project root as working directory, and a
//! typed failure carrying the captured output.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Maximum number of captured lines echoed after a quiet command.
const NOTABLE_LINES_SHOWN: usize = 3;

/// Captured output of a completed command.
///
/// Empty in verbose mode, where the child inherits the terminal instead.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
  pub stdout: String,
  pub stderr: String,
}

/// Runs toolchain commands from the project root.
#[derive(Debug, Clone)]
pub struct Runner {
  project_root: PathBuf,
  verbose: bool,
}

impl Runner {
  pub fn new(project_root: impl Into<PathBuf>, verbose: bool) -> Self {
    Self {
      project_root: project_root.into(),
      verbose,
    }
  }

  /// Run `program` with `args` and wait for it to finish.
  ///
  /// In verbose mode the child inherits stdio so its output streams live;
  /// otherwise both streams are captured and returned. A non-zero exit maps
  /// to [`Error::CommandFailed`]; a program that cannot be spawned maps to
  /// [`Error::ToolNotFound`].
  pub async fn run(&self, program: &Path, args: &[&str], description: &str) -> Result<CommandOutput> {
    self.spawn(program, args, description, self.verbose).await
  }

  /// Run `program` with `args`, always capturing output.
  ///
  /// Used for probes (like `npm --version`) whose output is data, not
  /// progress, so verbose mode must not stream it.
  pub async fn capture(&self, program: &Path, args: &[&str], description: &str) -> Result<CommandOutput> {
    self.spawn(program, args, description, false).await
  }

  async fn spawn(&self, program: &Path, args: &[&str], description: &str, inherit_stdio: bool) -> Result<CommandOutput> {
    info!(program = %program.display(), ?args, "running: {description}");

    let mut command = Command::new(program);
    command.args(args).current_dir(&self.project_root);

    if inherit_stdio {
      let status = command
        .status()
        .await
        .map_err(|e| spawn_error(program, e))?;

      if !status.success() {
        return Err(Error::CommandFailed {
          description: description.to_string(),
          code: status.code(),
          stdout: String::new(),
          stderr: String::new(),
        });
      }

      return Ok(CommandOutput::default());
    }

    let output = command.output().await.map_err(|e| spawn_error(program, e))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
      debug!(code = ?output.status.code(), "command failed: {description}");
      return Err(Error::CommandFailed {
        description: description.to_string(),
        code: output.status.code(),
        stdout,
        stderr,
      });
    }

    Ok(CommandOutput { stdout, stderr })
  }
}

fn spawn_error(program: &Path, error: std::io::Error) -> Error {
  if error.kind() == std::io::ErrorKind::NotFound {
    let tool = program
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_else(|| program.display().to_string());
    Error::ToolNotFound { tool }
  } else {
    Error::Io(error)
  }
}

/// Captured lines worth echoing after a quiet run: the last few mentioning
/// errors, warnings, or completion.
pub fn notable_lines(text: &str) -> Vec<&str> {
  const KEYWORDS: [&str; 4] = ["error", "warning", "success", "complete"];

  let notable: Vec<&str> = text
    .lines()
    .filter(|line| {
      let lower = line.to_lowercase();
      KEYWORDS.iter().any(|k| lower.contains(k))
    })
    .collect();

  let skip = notable.len().saturating_sub(NOTABLE_LINES_SHOWN);
  notable[skip..].to_vec()
}
