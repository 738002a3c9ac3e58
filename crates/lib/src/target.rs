//! Installer target platforms and flag resolution.

use std::fmt;

/// Platforms an installer can be produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
  Windows,
  MacOs,
  Linux,
}

impl Target {
  /// Every supported target, in build order.
  pub const ALL: [Target; 3] = [Target::Windows, Target::MacOs, Target::Linux];

  /// Detect the target matching the host operating system.
  ///
  /// Returns `None` when the host OS has no installer target.
  pub fn host() -> Option<Self> {
    match std::env::consts::OS {
      "windows" => Some(Self::Windows),
      "macos" => Some(Self::MacOs),
      "linux" => Some(Self::Linux),
      _ => None,
    }
  }

  /// The npm script that produces this target's installer.
  pub fn npm_script(&self) -> &'static str {
    match self {
      Self::Windows => "make:win",
      Self::MacOs => "make:mac",
      Self::Linux => "make:linux",
    }
  }

  /// Installer format produced for this target.
  pub fn installer_kind(&self) -> &'static str {
    match self {
      Self::Windows => "NSIS",
      Self::MacOs => "DMG",
      Self::Linux => "AppImage",
    }
  }

  /// Returns the lowercase identifier for this target.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Windows => "windows",
      Self::MacOs => "macos",
      Self::Linux => "linux",
    }
  }

  /// Human name used in status lines and summaries.
  pub fn display_name(&self) -> &'static str {
    match self {
      Self::Windows => "Windows",
      Self::MacOs => "macOS",
      Self::Linux => "Linux",
    }
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Platform selection flags as given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetFlags {
  pub windows: bool,
  pub macos: bool,
  pub linux: bool,
  pub all: bool,
}

/// The resolved set of targets for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTargets {
  /// Targets to build, in build order.
  pub targets: Vec<Target>,
  /// Set when no flag was given and the host OS is not a supported target,
  /// so the Windows default was used. The caller should warn.
  pub host_fallback: bool,
}

/// Resolve the platform flags against a host OS.
///
/// `--all` selects every target regardless of the other flags. With no
/// platform flag at all the host target is used; an unrecognized host falls
/// back to Windows.
pub fn resolve_targets(flags: &TargetFlags, host: Option<Target>) -> ResolvedTargets {
  if flags.all {
    return ResolvedTargets {
      targets: Target::ALL.to_vec(),
      host_fallback: false,
    };
  }

  let mut targets = Vec::new();
  if flags.windows {
    targets.push(Target::Windows);
  }
  if flags.macos {
    targets.push(Target::MacOs);
  }
  if flags.linux {
    targets.push(Target::Linux);
  }

  if !targets.is_empty() {
    return ResolvedTargets {
      targets,
      host_fallback: false,
    };
  }

  match host {
    Some(target) => ResolvedTargets {
      targets: vec![target],
      host_fallback: false,
    },
    None => ResolvedTargets {
      targets: vec![Target::Windows],
      host_fallback: true,
    },
  }
}
