//! Search subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_search_case_insensitive() {
    cargo_bin_cmd!("mdblocks")
        .args(["search", "rust"])
        .write_stdin("Rust and *rust*")
        .assert()
        .success()
        .stdout("0..4\n  block 0 0..4\n9..13\n  block 0 9..13\n");
}

#[test]
fn test_search_case_sensitive_flag() {
    cargo_bin_cmd!("mdblocks")
        .args(["search", "--case-sensitive", "rust"])
        .write_stdin("Rust and *rust*")
        .assert()
        .success()
        .stdout("9..13\n  block 0 9..13\n");
}

#[test]
fn test_search_across_blocks() {
    cargo_bin_cmd!("mdblocks")
        .args(["search", "b  "])
        .write_stdin("ab ![i](x) cd")
        .assert()
        .success()
        .stdout("1..4\n  block 0 1..3\n  block 1 0..1\n");
}

#[test]
fn test_search_config_from_file_dir() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("notes.md");
    fs::write(&test_file, "Rust and rust").unwrap();
    fs::write(
        temp_dir.path().join("mdblocks.toml"),
        "[search]\ncase_sensitive = true\n",
    )
    .unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["search", "rust", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("9..13\n  block 0 9..13\n");
}

#[test]
fn test_search_no_hits() {
    cargo_bin_cmd!("mdblocks")
        .args(["search", "absent"])
        .write_stdin("nothing here")
        .assert()
        .success()
        .stdout("");
}
