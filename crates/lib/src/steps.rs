//! The build and installer generation steps.
//!
//! Each step wraps one npm invocation. The application build is fatal on
//! failure; installer targets are independent, so one failing target never
//! prevents attempting the rest.

use tracing::info;

use crate::error::{Error, Result};
use crate::prereq::Npm;
use crate::runner::{CommandOutput, Runner};
use crate::target::Target;

/// How a failed macOS installer run is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MacPolicy {
  /// A macOS failure counts like any other failure.
  #[default]
  Strict,
  /// On a non-macOS host a macOS failure is downgraded to a skip, since the
  /// DMG tooling only works on macOS.
  SkipOffHost,
}

/// Outcome of one installer target.
#[derive(Debug)]
pub enum TargetStatus {
  Built(CommandOutput),
  Failed(Error),
  Skipped,
}

impl TargetStatus {
  pub fn is_failure(&self) -> bool {
    matches!(self, Self::Failed(_))
  }
}

/// One installer target paired with how its run ended.
#[derive(Debug)]
pub struct TargetOutcome {
  pub target: Target,
  pub status: TargetStatus,
}

/// Run the application bundling step (`npm run build`).
pub async fn build_app(runner: &Runner, npm: &Npm) -> Result<CommandOutput> {
  runner.run(npm.program(), &["run", "build"], "application build").await
}

/// Produce the installer for one target (`npm run make:*`).
pub async fn make_installer(runner: &Runner, npm: &Npm, target: Target) -> Result<CommandOutput> {
  let description = format!("{} installer ({})", target.display_name(), target.installer_kind());
  runner.run(npm.program(), &["run", target.npm_script()], &description).await
}

/// Classify an installer failure under the given policy.
pub fn failure_status(target: Target, error: Error, policy: MacPolicy) -> TargetStatus {
  let off_host = Target::host() != Some(Target::MacOs);
  if policy == MacPolicy::SkipOffHost && target == Target::MacOs && off_host {
    info!("macOS installer failed off-host, treating as skipped");
    return TargetStatus::Skipped;
  }
  TargetStatus::Failed(error)
}

/// Whether a run succeeded overall: no target failed (skips are fine).
pub fn overall_success(outcomes: &[TargetOutcome]) -> bool {
  outcomes.iter().all(|outcome| !outcome.status.is_failure())
}
