//! Text and clear subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_text_stdin() {
    cargo_bin_cmd!("mdblocks")
        .arg("text")
        .write_stdin("- a *b*\n![i](x.png)")
        .assert()
        .success()
        .stdout("a b\n ");
}

#[test]
fn test_text_file_keeps_code() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "# Title\n```\n**raw**\n```\n> ~~gone~~ kept").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["text", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Title\n\n**raw**\n\ngone kept");
}

#[test]
fn test_clear_strips_top_level_only() {
    cargo_bin_cmd!("mdblocks")
        .arg("clear")
        .write_stdin("**x** and ~~y~~\n- see [l](u)")
        .assert()
        .success()
        .stdout("x and y\nsee [l](u)");
}
