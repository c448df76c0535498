//! End-to-end tests for the baler binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn baler() -> Command {
    let mut cmd = Command::cargo_bin("baler").unwrap();
    // Tests control the mode explicitly
    cmd.env_remove("BALER_MODE");
    cmd
}

fn scaffold(root: &Path) {
    let src = root.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("index.html"), "<html><body></body></html>").unwrap();
    fs::write(src.join("index.js"), "console.log('hello')").unwrap();
    fs::create_dir_all(root.join("public")).unwrap();
}

#[test]
fn plan_defaults_to_production() {
    let dir = TempDir::new().unwrap();

    baler()
        .args(["plan", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"production\""))
        .stdout(predicate::str::contains("script-minifier"));
}

#[test]
fn plan_respects_mode_flag() {
    let dir = TempDir::new().unwrap();

    baler()
        .args(["plan", "--mode", "development", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"development\""))
        .stdout(predicate::str::contains("\"minimizers\": []"))
        .stdout(predicate::str::contains("\"source_maps\": \"external\""));
}

#[test]
fn plan_respects_mode_env_var() {
    let dir = TempDir::new().unwrap();

    baler()
        .env("BALER_MODE", "development")
        .args(["plan", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"development\""));
}

#[test]
fn mode_flag_wins_over_env_var() {
    let dir = TempDir::new().unwrap();

    baler()
        .env("BALER_MODE", "development")
        .args(["plan", "--mode", "production", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"production\""));
}

#[test]
fn plan_reads_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("baler.toml"),
        "[bundle]\noutput_dir = \"build\"\n",
    )
    .unwrap();

    baler()
        .args(["plan", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output_dir\": \"build\""));
}

#[test]
fn plan_analyze_flag_adds_analyzer_in_production() {
    let dir = TempDir::new().unwrap();

    baler()
        .args(["plan", "--analyze", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle-analyzer"));
}

#[test]
fn plan_summary_is_human_readable() {
    let dir = TempDir::new().unwrap();

    baler()
        .args(["plan", "--summary", "--mode", "development", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Mode: development"))
        .stderr(predicate::str::contains("hot reload on"));
}

#[test]
fn check_passes_on_conventional_tree() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());

    baler()
        .args(["check", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration is valid"));
}

#[test]
fn check_fails_without_template() {
    let dir = TempDir::new().unwrap();

    baler()
        .args(["check", "--root"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("template"));
}

#[test]
fn explain_shows_preprocessor_chain_for_scss() {
    let dir = TempDir::new().unwrap();

    baler()
        .args(["explain", "a.scss", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("style-extract"))
        .stdout(predicate::str::contains("sass-preprocessor"));
}

#[test]
fn explain_reports_excluded_dependency_scripts() {
    let dir = TempDir::new().unwrap();

    baler()
        .args(["explain", "node_modules/lodash/index.js", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no rule matches"));
}

#[test]
fn no_color_flag_strips_ansi_from_status_output() {
    let dir = TempDir::new().unwrap();

    baler()
        .args(["plan", "--summary", "--no-color", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Mode: production"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn no_color_env_var_strips_ansi_from_status_output() {
    let dir = TempDir::new().unwrap();

    baler()
        .env("NO_COLOR", "1")
        .env_remove("FORCE_COLOR")
        .args(["plan", "--summary", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn check_warns_when_entry_bundles_would_collide() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());
    fs::write(dir.path().join("src/admin.js"), "console.log('admin')").unwrap();
    fs::write(
        dir.path().join("baler.toml"),
        r#"
[bundle]
filename_template = "app.[contenthash].js"

[bundle.entries]
main = ["./index.js"]
admin = ["./admin.js"]
"#,
    )
    .unwrap();

    baler()
        .args(["check", "--no-color", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("no [name] placeholder"))
        .stderr(predicate::str::contains("Configuration is valid"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();

    baler()
        .args(["plan", "--config", "missing.toml", "--root"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
