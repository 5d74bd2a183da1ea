//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_help() {
    cargo_bin_cmd!("mdblocks")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mdblocks parses a small Markdown subset"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("mdblocks")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("mdblocks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("mdblocks")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_search_help() {
    cargo_bin_cmd!("mdblocks")
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--case-sensitive"));
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.md");

    cargo_bin_cmd!("mdblocks")
        .args(["text", missing.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_invalid_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "max_depth = \"deep\"").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["text", "--config", config_file.to_str().unwrap()])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_nesting_limit_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("deep.md");
    fs::write(&test_file, "> > > x").unwrap();
    fs::write(temp_dir.path().join(".mdblocks.toml"), "max_depth = 1").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NestingTooDeep"));
}
