//! Discovery of produced installer artifacts.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// File extensions (lowercase) treated as installer artifacts.
pub const INSTALLER_EXTENSIONS: [&str; 6] = ["exe", "dmg", "deb", "rpm", "appimage", "zip"];

/// Directory the toolchain writes installers to, relative to the project root.
pub const OUTPUT_DIR: &str = "out";

/// An installer file found in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
  pub path: PathBuf,
  pub len: u64,
}

impl Artifact {
  /// File name for display; falls back to the full path.
  pub fn file_name(&self) -> String {
    self
      .path
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_else(|| self.path.display().to_string())
  }
}

/// Recursively scan `out_dir` for installer artifacts, sorted by path.
///
/// A missing directory yields an empty listing; the scan never fails.
pub fn scan_artifacts(out_dir: &Path) -> Vec<Artifact> {
  if !out_dir.is_dir() {
    debug!(path = %out_dir.display(), "output directory absent, nothing to report");
    return Vec::new();
  }

  let mut artifacts: Vec<Artifact> = WalkDir::new(out_dir)
    .into_iter()
    .filter_map(|entry| entry.ok())
    .filter(|entry| entry.file_type().is_file())
    .filter(|entry| is_installer(entry.path()))
    .filter_map(|entry| {
      let len = entry.metadata().ok()?.len();
      Some(Artifact {
        path: entry.into_path(),
        len,
      })
    })
    .collect();

  artifacts.sort_by(|a, b| a.path.cmp(&b.path));
  artifacts
}

fn is_installer(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| INSTALLER_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
