//! Interactive entry point: a numbered menu driving the same build steps.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use mkdist_cli::output::{self, format_duration, print_error, print_info, print_success};
use mkdist_cli::prompts;
use mkdist_lib::clean::clean_outputs;
use mkdist_lib::manifest::AppManifest;
use mkdist_lib::prereq::{self, Npm};
use mkdist_lib::report::{OUTPUT_DIR, scan_artifacts};
use mkdist_lib::runner::Runner;
use mkdist_lib::steps::{self, MacPolicy, TargetOutcome, TargetStatus};
use mkdist_lib::target::Target;

const WINDOWS_ONLY: &[Target] = &[Target::Windows];

/// What one menu selection builds.
struct RoundPlan {
  clean: bool,
  targets: &'static [Target],
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .without_time()
    .init();

  let rt = Runtime::new().context("Failed to create async runtime")?;

  // An interrupt at the prompt should say goodbye, not dump a trace.
  rt.spawn(async {
    if tokio::signal::ctrl_c().await.is_ok() {
      println!();
      println!("Goodbye!");
      std::process::exit(0);
    }
  });

  output::print_banner("mkdist installer builder");

  let project_root = dunce::canonicalize(".").context("cannot resolve the current directory")?;
  let runner = Runner::new(&project_root, false);

  let npm = match rt.block_on(check_prerequisites(&runner, &project_root)) {
    Ok(npm) => npm,
    Err(e) => {
      print_error(&e.to_string());
      println!();
      let _ = prompts::read_line("Press Enter to exit...");
      std::process::exit(1);
    }
  };

  loop {
    println!();
    print_menu();
    let Some(choice) = prompts::read_line("Enter your choice (1-6): ")? else {
      println!("Goodbye!");
      return Ok(());
    };

    let plan = match choice.as_str() {
      "1" => RoundPlan {
        clean: false,
        targets: WINDOWS_ONLY,
      },
      "2" => RoundPlan {
        clean: false,
        targets: &Target::ALL,
      },
      "3" => RoundPlan {
        clean: true,
        targets: WINDOWS_ONLY,
      },
      "4" => RoundPlan {
        clean: true,
        targets: &Target::ALL,
      },
      "5" => {
        print_help();
        continue;
      }
      "6" => {
        println!();
        println!("Goodbye!");
        return Ok(());
      }
      _ => {
        print_error("Invalid choice. Please enter 1-6.");
        continue;
      }
    };

    rt.block_on(run_round(&runner, &npm, &project_root, &plan))?;

    println!();
    if !prompts::confirm("Build another?")? {
      println!("Goodbye!");
      return Ok(());
    }
  }
}

fn print_menu() {
  println!("Select a build option:");
  println!();
  println!("  1. Windows installer only");
  println!("  2. All platforms");
  println!("  3. Clean build + Windows installer");
  println!("  4. Clean build + All platforms");
  println!("  5. Help");
  println!("  6. Exit");
  println!();
}

fn print_help() {
  println!();
  println!("Build options:");
  println!("  Windows only   a .exe installer for Windows (NSIS)");
  println!("  All platforms  installers for Windows, macOS, and Linux");
  println!("  Clean build    removes previous build output first");
  println!();
  println!("Requirements: Node.js with npm on PATH, run from the project root.");
  println!("Installers are written to the {}/ directory.", OUTPUT_DIR);
}

async fn check_prerequisites(runner: &Runner, project_root: &Path) -> mkdist_lib::Result<Npm> {
  print_info("Checking prerequisites...");

  let npm = Npm::locate(runner).await?;
  print_success(&format!("npm version: {}", npm.version()));

  AppManifest::load(project_root)?;

  if !prereq::dependencies_installed(project_root) {
    print_info("node_modules not found. Installing dependencies...");
    prereq::install_dependencies(runner, &npm).await?;
  }

  print_success("All prerequisites met!");
  Ok(npm)
}

async fn run_round(runner: &Runner, npm: &Npm, project_root: &Path, plan: &RoundPlan) -> Result<()> {
  let started = Instant::now();
  println!();

  if plan.clean {
    print_info("Cleaning previous build output...");
    for path in clean_outputs(project_root)? {
      print_success(&format!("Removed {}", path.display()));
    }
  }

  let mut success = true;

  print_info("Building application...");
  match steps::build_app(runner, npm).await {
    Ok(build_output) => {
      output::print_notable(&build_output);
      print_success("Application build completed");
    }
    Err(e) => {
      output::print_command_failure(&e);
      success = false;
    }
  }

  if success {
    let mut outcomes = Vec::new();
    for &target in plan.targets {
      if target == Target::MacOs {
        print_info("Attempting macOS build (may fail on non-macOS hosts)...");
      }

      print_info(&format!("Creating {} installer...", target.display_name()));
      let status = match steps::make_installer(runner, npm, target).await {
        Ok(make_output) => {
          output::print_notable(&make_output);
          print_success(&format!("{} installer created", target.display_name()));
          TargetStatus::Built(make_output)
        }
        Err(e) => {
          let status = steps::failure_status(target, e, MacPolicy::SkipOffHost);
          match &status {
            TargetStatus::Skipped => print_info("macOS build skipped (requires a macOS host)"),
            TargetStatus::Failed(e) => output::print_command_failure(e),
            TargetStatus::Built(_) => {}
          }
          status
        }
      };
      outcomes.push(TargetOutcome { target, status });
    }
    success = steps::overall_success(&outcomes);
  }

  println!();
  output::print_rule();
  if success {
    print_success(&format!("Build completed in {}", format_duration(started.elapsed())));
    let out_dir = project_root.join(OUTPUT_DIR);
    output::print_artifacts(&out_dir, &scan_artifacts(&out_dir));
    if out_dir.is_dir() {
      print_info(&format!("All files are in {}", out_dir.display()));
    }
  } else {
    print_error("Build failed. Check the errors above.");
  }
  output::print_rule();
  Ok(())
}
