//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages, human-readable byte/duration formatting, and Unicode symbols.

use std::path::Path;
use std::time::Duration;

use owo_colors::{OwoColorize, Stream};

use mkdist_lib::Error;
use mkdist_lib::report::Artifact;
use mkdist_lib::runner::{CommandOutput, notable_lines};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
}

const RULE_WIDTH: usize = 60;

pub fn format_bytes(bytes: u64) -> String {
  const KB: u64 = 1024;
  const MB: u64 = KB * 1024;
  const GB: u64 = MB * 1024;

  if bytes >= GB {
    format!("{:.1} GB", bytes as f64 / GB as f64)
  } else if bytes >= MB {
    format!("{:.1} MB", bytes as f64 / MB as f64)
  } else if bytes >= KB {
    format!("{:.1} KB", bytes as f64 / KB as f64)
  } else {
    format!("{} B", bytes)
  }
}

pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let millis = duration.subsec_millis();

  if secs >= 60 {
    let mins = secs / 60;
    let remaining_secs = secs % 60;
    format!("{}m {}s", mins, remaining_secs)
  } else if secs > 0 {
    format!("{}.{:02}s", secs, millis / 10)
  } else {
    format!("{}ms", millis)
  }
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_rule() {
  println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn print_banner(title: &str) {
  print_rule();
  println!("{}", title);
  print_rule();
}

/// Echo the interesting lines of a quiet command's captured output.
pub fn print_notable(output: &CommandOutput) {
  for line in notable_lines(&output.stdout) {
    println!("{}", line);
  }
}

/// Report a failed step, dumping captured output when there is any.
pub fn print_command_failure(error: &Error) {
  print_error(&error.to_string());

  if let Error::CommandFailed { stdout, stderr, .. } = error {
    if !stdout.trim().is_empty() {
      eprintln!("stdout:");
      for line in stdout.lines() {
        eprintln!("  {}", line);
      }
    }
    if !stderr.trim().is_empty() {
      eprintln!("stderr:");
      for line in stderr.lines() {
        eprintln!("  {}", line);
      }
    }
  }
}

/// List the installers found in the output directory.
pub fn print_artifacts(out_dir: &Path, artifacts: &[Artifact]) {
  if !out_dir.is_dir() {
    print_warning(&format!("Output directory {} not found", out_dir.display()));
    return;
  }

  if artifacts.is_empty() {
    print_info(&format!("No installer files found in {}", out_dir.display()));
    return;
  }

  print_success("Generated installers:");
  for artifact in artifacts {
    println!(
      "  {} {} ({})",
      symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
      artifact.file_name(),
      format_bytes(artifact.len)
    );
    println!(
      "      {} {}",
      symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.dimmed()),
      artifact.path.display().if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
  }
}

/// Everything the end-of-run summary displays.
pub struct Summary<'a> {
  pub product: &'a str,
  pub version: &'a str,
  pub elapsed: Duration,
  pub built: &'a [&'a str],
  pub success: bool,
  pub out_dir: &'a Path,
}

pub fn print_summary(summary: &Summary<'_>) {
  println!();
  print_rule();
  println!("Build Summary");
  print_rule();

  print_stat("Application", summary.product);
  print_stat("Version", summary.version);
  print_stat("Build time", &format_duration(summary.elapsed));
  print_stat("Host", &format!("{} {}", std::env::consts::OS, std::env::consts::ARCH));
  if !summary.built.is_empty() {
    print_stat("Platforms built", &summary.built.join(", "));
  }

  println!();
  if summary.success {
    print_success("All builds completed successfully");
    print_info(&format!("Installers are in {}", summary.out_dir.display()));
  } else {
    print_error("Some builds failed. Check the logs above for details.");
  }
  print_rule();
}
