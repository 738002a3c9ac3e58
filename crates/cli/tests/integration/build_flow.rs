//! Build flow tests for the flag-driven binary.

use predicates::prelude::*;

use super::common::TestProject;

#[test]
fn successful_all_platform_build() {
  let project = TestProject::new();
  project.stub_npm(r#"if [ "$2" = "make:win" ]; then mkdir -p out; printf xxxx > out/demo-setup.exe; fi"#);

  project
    .mkdist_cmd()
    .arg("--all")
    .assert()
    .success()
    .stdout(predicate::str::contains("All builds completed successfully"))
    .stdout(predicate::str::contains("demo-setup.exe"));

  assert_eq!(
    project.calls(),
    vec!["run build", "run make:win", "run make:mac", "run make:linux"]
  );
}

#[test]
fn build_failure_short_circuits_installers() {
  let project = TestProject::new();
  project.stub_npm(r#"if [ "$2" = "build" ]; then exit 1; fi"#);

  project
    .mkdist_cmd()
    .arg("--windows")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Application build failed"));

  assert_eq!(project.calls(), vec!["run build"]);
}

#[test]
fn failing_target_does_not_block_the_rest() {
  let project = TestProject::new();
  project.stub_npm(r#"if [ "$2" = "make:win" ]; then exit 1; fi"#);

  project
    .mkdist_cmd()
    .arg("--all")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Some builds failed"));

  assert_eq!(
    project.calls(),
    vec!["run build", "run make:win", "run make:mac", "run make:linux"]
  );
}

#[test]
fn mac_failure_is_strict_for_the_flag_binary() {
  let project = TestProject::new();
  project.stub_npm(r#"if [ "$2" = "make:mac" ]; then exit 1; fi"#);

  project.mkdist_cmd().arg("--all").assert().failure();
}

#[test]
fn clean_removes_previous_output() {
  let project = TestProject::new();
  project.write_file("out/stale.exe", "x");
  project.write_file("dist/bundle.js", "x");
  project.write_file(".webpack/main.js", "x");
  project.write_file("src/renderer/app.js", "x");
  project.write_file("src/renderer/app.ts", "x");

  project.mkdist_cmd().arg("--clean").arg("--windows").assert().success();

  assert!(!project.path_in_project("out").exists());
  assert!(!project.path_in_project("dist").exists());
  assert!(!project.path_in_project(".webpack").exists());
  assert!(!project.path_in_project("src/renderer/app.js").exists());
  assert!(project.path_in_project("src/renderer/app.ts").exists());
}

#[test]
fn install_deps_flag_forces_a_reinstall() {
  let project = TestProject::new();

  project.mkdist_cmd().arg("--install-deps").arg("--windows").assert().success();

  assert_eq!(project.calls(), vec!["install", "run build", "run make:win"]);
}

#[test]
fn missing_node_modules_triggers_an_install() {
  let project = TestProject::new();
  std::fs::remove_dir(project.path_in_project("node_modules")).unwrap();

  project.mkdist_cmd().arg("--windows").assert().success();

  assert_eq!(project.calls(), vec!["install", "run build", "run make:win"]);
}

#[test]
fn missing_npm_halts_the_run() {
  let project = TestProject::new();
  project.remove_npm();

  project
    .mkdist_cmd()
    .arg("--windows")
    .assert()
    .failure()
    .stderr(predicate::str::contains("npm"));

  assert!(project.calls().is_empty());
}

#[test]
fn missing_manifest_halts_the_run() {
  let project = TestProject::new();
  std::fs::remove_file(project.path_in_project("package.json")).unwrap();

  project
    .mkdist_cmd()
    .arg("--windows")
    .assert()
    .failure()
    .stderr(predicate::str::contains("package.json"));

  assert!(project.calls().is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn no_flags_defaults_to_the_host_platform() {
  let project = TestProject::new();

  project.mkdist_cmd().assert().success();

  assert_eq!(project.calls(), vec!["run build", "run make:linux"]);
}

#[test]
fn summary_names_the_product_and_version() {
  let project = TestProject::new();

  project
    .mkdist_cmd()
    .arg("--windows")
    .assert()
    .success()
    .stdout(predicate::str::contains("Demo App"))
    .stdout(predicate::str::contains("1.2.3"))
    .stdout(predicate::str::contains("Platforms built: Windows"));
}

#[test]
fn quiet_mode_echoes_notable_output() {
  let project = TestProject::new();
  project.stub_npm(r#"echo "webpack compiled with 1 warning""#);

  project
    .mkdist_cmd()
    .arg("--windows")
    .assert()
    .success()
    .stdout(predicate::str::contains("webpack compiled with 1 warning"));
}

#[test]
fn verbose_mode_streams_toolchain_output() {
  let project = TestProject::new();
  project.stub_npm("echo streaming-marker");

  project
    .mkdist_cmd()
    .arg("--windows")
    .arg("--verbose")
    .assert()
    .success()
    .stdout(predicate::str::contains("streaming-marker"));
}
