//! Menu flow tests for the interactive binary.

use predicates::prelude::*;

use super::common::TestProject;

#[test]
fn exit_option_quits() {
  let project = TestProject::new();

  project
    .menu_cmd()
    .write_stdin("6\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Goodbye!"));

  assert!(project.calls().is_empty());
}

#[test]
fn invalid_choice_reprompts() {
  let project = TestProject::new();

  project
    .menu_cmd()
    .write_stdin("9\n6\n")
    .assert()
    .success()
    .stderr(predicate::str::contains("Invalid choice"));
}

#[test]
fn windows_round_builds_and_reports() {
  let project = TestProject::new();
  project.stub_npm(r#"if [ "$2" = "make:win" ]; then mkdir -p out; printf xxxx > out/demo-setup.exe; fi"#);

  project
    .menu_cmd()
    .write_stdin("1\nn\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Build completed in"))
    .stdout(predicate::str::contains("demo-setup.exe"));

  assert_eq!(project.calls(), vec!["run build", "run make:win"]);
}

#[test]
fn all_platforms_round_attempts_every_target() {
  let project = TestProject::new();

  project.menu_cmd().write_stdin("2\nn\n").assert().success();

  assert_eq!(
    project.calls(),
    vec!["run build", "run make:win", "run make:mac", "run make:linux"]
  );
}

#[cfg(not(target_os = "macos"))]
#[test]
fn mac_failure_is_skipped_off_host() {
  let project = TestProject::new();
  project.stub_npm(r#"if [ "$2" = "make:mac" ]; then exit 1; fi"#);

  project
    .menu_cmd()
    .write_stdin("2\nn\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("macOS build skipped (requires a macOS host)"))
    .stdout(predicate::str::contains("Build completed in"));
}

#[test]
fn clean_round_removes_previous_output() {
  let project = TestProject::new();
  project.write_file("dist/bundle.js", "x");
  project.write_file(".webpack/main.js", "x");

  project.menu_cmd().write_stdin("3\nn\n").assert().success();

  assert!(!project.path_in_project("dist").exists());
  assert!(!project.path_in_project(".webpack").exists());
  assert_eq!(project.calls(), vec!["run build", "run make:win"]);
}

#[test]
fn failed_build_reports_and_returns_to_the_menu() {
  let project = TestProject::new();
  project.stub_npm(r#"if [ "$2" = "build" ]; then exit 1; fi"#);

  project
    .menu_cmd()
    .write_stdin("1\nn\n")
    .assert()
    .success()
    .stderr(predicate::str::contains("Build failed"));

  assert_eq!(project.calls(), vec!["run build"]);
}

#[test]
fn help_lists_the_build_options() {
  let project = TestProject::new();

  project
    .menu_cmd()
    .write_stdin("5\n6\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Build options"));
}

#[test]
fn eof_exits_cleanly() {
  let project = TestProject::new();

  project
    .menu_cmd()
    .write_stdin("")
    .assert()
    .success()
    .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn interrupt_at_the_prompt_exits_cleanly() {
  use std::io::Read;
  use std::process::Stdio;
  use std::time::Duration;

  let project = TestProject::new();

  let mut child = project
    .menu_raw_cmd()
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::null())
    .spawn()
    .unwrap();

  // Wait until the menu is blocked at the choice prompt.
  let mut stdout = child.stdout.take().unwrap();
  let mut seen = Vec::new();
  let mut buf = [0u8; 1024];
  while !String::from_utf8_lossy(&seen).contains("Enter your choice") {
    let n = stdout.read(&mut buf).unwrap();
    assert!(n > 0, "menu exited before showing the prompt");
    seen.extend_from_slice(&buf[..n]);
  }

  let kill = std::process::Command::new("/bin/sh")
    .arg("-c")
    .arg(format!("kill -INT {}", child.id()))
    .status()
    .unwrap();
  assert!(kill.success());

  let mut status = None;
  for _ in 0..50 {
    if let Some(exit) = child.try_wait().unwrap() {
      status = Some(exit);
      break;
    }
    std::thread::sleep(Duration::from_millis(100));
  }
  let Some(status) = status else {
    let _ = child.kill();
    panic!("menu did not exit after the interrupt");
  };

  stdout.read_to_end(&mut seen).unwrap();
  assert!(status.success());
  assert!(String::from_utf8_lossy(&seen).contains("Goodbye!"));
}

#[test]
fn prerequisite_failure_waits_then_exits() {
  let project = TestProject::new();
  project.remove_npm();

  project
    .menu_cmd()
    .write_stdin("\n")
    .assert()
    .failure()
    .stderr(predicate::str::contains("npm"));
}

#[test]
fn build_another_yes_runs_a_second_round() {
  let project = TestProject::new();

  project.menu_cmd().write_stdin("1\ny\n1\nn\n").assert().success();

  assert_eq!(
    project.calls(),
    vec!["run build", "run make:win", "run build", "run make:win"]
  );
}
