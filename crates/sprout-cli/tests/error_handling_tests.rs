//! Failure paths of the `sprout` binary: every one exits 1 and leaves the
//! filesystem as it was.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sprout(cwd: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("sprout");
    cmd.current_dir(cwd.path())
        .env("HOME", cwd.path())
        .env("XDG_CONFIG_HOME", cwd.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn entries(dir: &TempDir) -> usize {
    fs::read_dir(dir.path()).unwrap().count()
}

#[test]
fn existing_directory_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("my-workspace")).unwrap();

    sprout(&dir)
        .args(["--template", "content-creator", "my-workspace"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert!(
        fs::read_dir(dir.path().join("my-workspace"))
            .unwrap()
            .next()
            .is_none()
    );
}

#[test]
fn existing_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("my-workspace"), "keep").unwrap();

    sprout(&dir)
        .args(["-t", "content-creator", "my-workspace"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Target already exists"))
        .stderr(predicate::str::contains("nothing was written"));

    assert_eq!(
        fs::read_to_string(dir.path().join("my-workspace")).unwrap(),
        "keep"
    );
}

#[test]
fn unknown_template_lists_alternatives() {
    let dir = TempDir::new().unwrap();

    sprout(&dir)
        .args(["--template", "nonexistent-template", "ws"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Template not found: nonexistent-template"))
        .stderr(predicate::str::contains("content-creator"));

    assert_eq!(entries(&dir), 0);
}

#[test]
fn empty_name_without_terminal_fails_cleanly() {
    let dir = TempDir::new().unwrap();

    // The blank name is rejected, the re-prompt cannot be shown.
    sprout(&dir)
        .args(["-t", "content-creator", "   "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("name cannot be empty"));

    assert_eq!(entries(&dir), 0);
}

#[test]
fn interactive_run_without_terminal_fails() {
    let dir = TempDir::new().unwrap();

    sprout(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Prompt failed"))
        .stderr(predicate::str::contains("interactive terminal"));

    assert_eq!(entries(&dir), 0);
}

#[test]
fn dot_names_are_invalid() {
    let dir = TempDir::new().unwrap();

    sprout(&dir)
        .args(["-t", "content-creator", ".."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid destination name '..'"))
        .stderr(predicate::str::contains("must point to a new directory"));

    assert_eq!(entries(&dir), 0);
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    sprout(&dir)
        .args(["--config", "absent.toml", "--list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn bad_argument_exits_one() {
    let dir = TempDir::new().unwrap();

    sprout(&dir)
        .args(["--output-format", "json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid value 'json'"))
        .stderr(predicate::str::contains("--output-format"));
}

#[test]
fn missing_template_source_is_a_transfer_failure() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("sprout.toml");
    fs::write(
        &config,
        format!(
            "[templates]\nroot = {:?}\n",
            dir.path().join("nowhere").display().to_string()
        ),
    )
    .unwrap();

    sprout(&dir)
        .arg("--config")
        .arg(&config)
        .args(["-t", "content-creator", "ws"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read template"));

    assert!(!dir.path().join("ws").exists());
}

#[test]
fn verbose_shows_cause_chain() {
    let dir = TempDir::new().unwrap();

    sprout(&dir)
        .args(["-v", "-t", "content-creator", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Caused by"));
}
