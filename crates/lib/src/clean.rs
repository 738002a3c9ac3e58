//! Removal of previous build output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;

/// Output directories removed by a clean, relative to the project root.
const CLEAN_DIRS: [&str; 3] = ["out", "dist", ".webpack"];

/// Suffixes of generated renderer scripts removed by a clean.
const RENDERER_SUFFIXES: [&str; 2] = [".js", ".js.map"];

/// Remove previous build output below `project_root`.
///
/// Deletes the fixed output directories plus the generated scripts under
/// `src/renderer/`. Missing entries are skipped, so the call is idempotent;
/// filesystem errors during a removal propagate. Returns the paths removed.
pub fn clean_outputs(project_root: &Path) -> Result<Vec<PathBuf>> {
  let mut removed = Vec::new();

  for dir in CLEAN_DIRS {
    let path = project_root.join(dir);
    if path.is_dir() {
      fs::remove_dir_all(&path)?;
      info!(path = %path.display(), "removed output directory");
      removed.push(path);
    }
  }

  let renderer_dir = project_root.join("src").join("renderer");
  if renderer_dir.is_dir() {
    for entry in fs::read_dir(&renderer_dir)? {
      let entry = entry?;
      let path = entry.path();
      if !path.is_file() {
        continue;
      }

      let name = entry.file_name();
      let Some(name) = name.to_str() else { continue };
      if RENDERER_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        fs::remove_file(&path)?;
        debug!(path = %path.display(), "removed generated script");
        removed.push(path);
      }
    }
  }

  Ok(removed)
}
