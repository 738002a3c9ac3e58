//! Flag-driven entry point: `mkdist --all --clean`.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mkdist_cli::output::{self, Summary, print_error, print_info, print_success, print_warning};
use mkdist_lib::clean::clean_outputs;
use mkdist_lib::manifest::AppManifest;
use mkdist_lib::prereq::{self, Npm};
use mkdist_lib::report::{OUTPUT_DIR, scan_artifacts};
use mkdist_lib::runner::Runner;
use mkdist_lib::steps::{self, MacPolicy, TargetOutcome, TargetStatus};
use mkdist_lib::target::{Target, TargetFlags, resolve_targets};

/// Build desktop installers by driving the project's npm toolchain
#[derive(Parser)]
#[command(name = "mkdist")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Build the Windows installer (NSIS)
  #[arg(long)]
  windows: bool,

  /// Build the macOS installer (DMG)
  #[arg(long)]
  macos: bool,

  /// Build the Linux installer (AppImage)
  #[arg(long)]
  linux: bool,

  /// Build installers for every platform
  #[arg(long)]
  all: bool,

  /// Remove previous build output before building
  #[arg(long)]
  clean: bool,

  /// Reinstall dependencies even when node_modules exists
  #[arg(long)]
  install_deps: bool,

  /// Project directory containing package.json
  #[arg(short = 'C', long, default_value = ".")]
  project_root: PathBuf,

  /// Stream toolchain output instead of capturing it
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
  tracing_subscriber::fmt().with_env_filter(filter).without_time().init();

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let success = rt.block_on(run(&cli))?;

  if !success {
    std::process::exit(1);
  }
  Ok(())
}

async fn run(cli: &Cli) -> Result<bool> {
  let started = Instant::now();

  let project_root = dunce::canonicalize(&cli.project_root)
    .with_context(|| format!("project root {} not accessible", cli.project_root.display()))?;
  debug!(root = %project_root.display(), "project root resolved");

  output::print_banner("mkdist installer builder");

  let flags = TargetFlags {
    windows: cli.windows,
    macos: cli.macos,
    linux: cli.linux,
    all: cli.all,
  };
  let resolved = resolve_targets(&flags, Target::host());
  if resolved.host_fallback {
    print_warning("Unrecognized host platform, defaulting to a Windows build");
  }

  print_info("Checking prerequisites...");
  let runner = Runner::new(&project_root, cli.verbose);
  let npm = match Npm::locate(&runner).await {
    Ok(npm) => npm,
    Err(e) => {
      print_error(&e.to_string());
      return Ok(false);
    }
  };
  print_success(&format!("npm version: {} (using {})", npm.version(), npm.program().display()));

  let manifest = match AppManifest::load(&project_root) {
    Ok(manifest) => manifest,
    Err(e) => {
      print_error(&e.to_string());
      return Ok(false);
    }
  };

  let deps_present = prereq::dependencies_installed(&project_root);
  if cli.install_deps || !deps_present {
    if !deps_present {
      print_warning("node_modules not found. Will run npm install.");
    }
    print_info("Installing dependencies...");
    if let Err(e) = prereq::install_dependencies(&runner, &npm).await {
      output::print_command_failure(&e);
      return Ok(false);
    }
    print_success("Dependencies installed");
  }
  print_success("All prerequisites met");

  if cli.clean {
    print_info("Cleaning previous build output...");
    for path in clean_outputs(&project_root)? {
      print_success(&format!("Removed {}", path.display()));
    }
  }

  print_info("Building application...");
  match steps::build_app(&runner, &npm).await {
    Ok(build_output) => {
      output::print_notable(&build_output);
      print_success("Application build completed");
    }
    Err(e) => {
      output::print_command_failure(&e);
      print_error("Application build failed");
      return Ok(false);
    }
  }

  let mut outcomes = Vec::new();
  for &target in &resolved.targets {
    if target == Target::MacOs && Target::host() != Some(Target::MacOs) {
      print_warning("macOS installers are best built on a macOS host");
    }

    print_info(&format!(
      "Creating {} installer ({})...",
      target.display_name(),
      target.installer_kind()
    ));
    let status = match steps::make_installer(&runner, &npm, target).await {
      Ok(make_output) => {
        output::print_notable(&make_output);
        print_success(&format!("{} installer created", target.display_name()));
        TargetStatus::Built(make_output)
      }
      Err(e) => {
        output::print_command_failure(&e);
        steps::failure_status(target, e, MacPolicy::Strict)
      }
    };
    outcomes.push(TargetOutcome { target, status });
  }

  let success = steps::overall_success(&outcomes);
  let built: Vec<&str> = outcomes
    .iter()
    .filter(|outcome| matches!(outcome.status, TargetStatus::Built(_)))
    .map(|outcome| outcome.target.display_name())
    .collect();

  let out_dir = project_root.join(OUTPUT_DIR);
  let artifacts = scan_artifacts(&out_dir);
  println!();
  output::print_artifacts(&out_dir, &artifacts);

  output::print_summary(&Summary {
    product: manifest.product_name(),
    version: manifest.version(),
    elapsed: started.elapsed(),
    built: &built,
    success,
    out_dir: &out_dir,
  });

  Ok(success)
}
