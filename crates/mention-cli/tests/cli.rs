use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Command running in an empty directory with no user config
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mention-helper").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .arg("--no-color");
    cmd
}

fn features_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../features")
}

#[test]
fn extract_prints_one_mention_per_line() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["extract", "thanks @dave! cc @bob and @carol"])
        .assert()
        .success()
        .stdout("dave\nbob\ncarol\n");
}

#[test]
fn extract_without_mentions_prints_nothing() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["extract", "no mentions here"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn extract_reads_stdin() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("extract")
        .write_stdin("hello @alice\nhow are you @alice")
        .assert()
        .success()
        .stdout("alice\nalice\n");
}

#[test]
fn extract_unique() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["extract", "--unique", "@alice @bob @alice"])
        .assert()
        .success()
        .stdout("alice\nbob\n");
}

#[test]
fn extract_json() {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir)
        .args(["extract", "--format", "json", "cc @bob,"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["body"], "cc @bob,");
    assert_eq!(json["mentions"], serde_json::json!(["bob"]));
}

#[test]
fn extract_rejects_word_sigil() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["extract", "--sigil", "a", "abob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sigil"));
}

#[test]
fn extract_uses_config_sigil() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[extract]\nsigil = \"+\"\n").unwrap();

    cmd(&dir)
        .arg("--config")
        .arg(&config)
        .args(["extract", "+alice @bob"])
        .assert()
        .success()
        .stdout("alice\n");
}

#[test]
fn run_repository_features() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("run")
        .arg(features_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("7 scenarios"));
}

#[test]
fn run_reports_failures() {
    let dir = TempDir::new().unwrap();
    let feature = dir.path().join("broken.feature");
    std::fs::write(
        &feature,
        "Feature: broken\n  Scenario: wrong user\n    Given I write a comment with body \"@alice\"\n    Then the comment's mentions should include the user \"bob\"\n",
    )
    .unwrap();

    cmd(&dir)
        .arg("run")
        .arg(&feature)
        .assert()
        .failure()
        .stdout(predicate::str::contains("wrong user"))
        .stderr(predicate::str::contains("1 of 1 scenarios failed"));
}

#[test]
fn run_missing_path() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["run", "nowhere.feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere.feature"));
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).args(["config", "init", "--force"]).assert().success();
    assert!(dir.path().join(".mention-helper/config.toml").exists());

    cmd(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    cmd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[extract]"));
}

#[test]
fn config_init_writes_explicit_path() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("custom").join("mentions.toml");

    cmd(&dir)
        .arg("--config")
        .arg(&target)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    assert!(target.exists());
    assert!(!dir.path().join(".mention-helper/config.toml").exists());

    cmd(&dir)
        .arg("--config")
        .arg(&target)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sigil = \"@\""));
}
