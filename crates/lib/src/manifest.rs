//! The project manifest (`package.json`).
//!
//! Only the fields the builder displays are modeled; the rest of the file is
//! the toolchain's business.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Subset of `package.json` used for reporting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppManifest {
  name: Option<String>,
  product_name: Option<String>,
  version: Option<String>,
}

impl AppManifest {
  /// Load the manifest from `<project_root>/package.json`.
  pub fn load(project_root: &Path) -> Result<Self> {
    let path = project_root.join(MANIFEST_FILE);
    if !path.exists() {
      return Err(Error::ManifestMissing { path });
    }

    let raw = fs::read_to_string(&path)?;
    serde_json::from_str(&raw).map_err(|e| Error::ManifestInvalid {
      path,
      message: e.to_string(),
    })
  }

  /// Product name shown in summaries; falls back to the package name.
  pub fn product_name(&self) -> &str {
    self
      .product_name
      .as_deref()
      .or(self.name.as_deref())
      .unwrap_or("unknown")
  }

  pub fn version(&self) -> &str {
    self.version.as_deref().unwrap_or("unknown")
  }
}
