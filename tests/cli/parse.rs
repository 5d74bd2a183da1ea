//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("mdblocks")
        .arg("parse")
        .write_stdin("# Heading\n**bold** text")
        .assert()
        .success()
        .stdout(predicate::str::contains("TEXT@0..17"))
        .stdout(predicate::str::contains("HEADER level=1 \"Heading\""))
        .stdout(predicate::str::contains("  BOLD\n    TEXT \"bold\""));
}

#[test]
fn test_parse_simple_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "intro ![pic](p.png)\n```\ncode\n```").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            "TEXT@0..6\n  TEXT \"intro \"\nIMAGE@6..7 alt=\"pic\" url=\"p.png\"\nTEXT@7..8\n  TEXT \"\\n\"\nSCROLL@8..14 \"\\ncode\\n\"\n",
        );
}

#[test]
fn test_parse_json() {
    let output = cargo_bin_cmd!("mdblocks")
        .args(["parse", "--json"])
        .write_stdin("# Hi")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    insta::assert_json_snapshot!(value, @r#"
    [
      {
        "bounds": {
          "end": 2,
          "start": 0
        },
        "elements": [
          {
            "kind": "header",
            "level": 1,
            "text": "Hi"
          }
        ],
        "kind": "text"
      }
    ]
    "#);
}

#[test]
fn test_parse_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join("custom.toml");

    fs::write(&test_file, "~~old~~ new").unwrap();
    fs::write(&config_file, "[extensions]\nstrikethrough = false\n").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args([
            "parse",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("STRIKE").not())
        .stdout(predicate::str::contains("TEXT \"~~old~~ new\""));
}

#[test]
fn test_parse_empty_input() {
    cargo_bin_cmd!("mdblocks")
        .arg("parse")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}
