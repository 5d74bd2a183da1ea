//! Golden test cases for the block parser.
//!
//! Each test case is a directory under `tests/cases/` containing:
//! - `input.md` - Source document
//! - `ast.txt` - Expected block outline
//! - `expected.txt` - Expected plain text
//! - `mdblocks.toml` - (Optional) Config to toggle rules for this case
//!
//! Run with `UPDATE_AST=1 cargo test` to regenerate outlines.
//! Run with `UPDATE_EXPECTED=1 cargo test` to regenerate plain text.

use mdblocks::{Config, extract_plain_text, outline, parse};
use std::{fs, path::Path};

/// Load config from test case directory if it exists.
fn load_test_config(dir: &Path) -> Option<Config> {
    let config_path = dir.join("mdblocks.toml");
    if config_path.exists() {
        let content = fs::read_to_string(config_path).ok()?;
        toml::from_str(&content).ok()
    } else {
        None
    }
}

/// Run a single golden test case.
fn run_golden_case(case_name: &str) {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cases")
        .join(case_name);

    let update_expected = std::env::var_os("UPDATE_EXPECTED").is_some();
    let update_ast = std::env::var_os("UPDATE_AST").is_some();

    let input_path = dir.join("input.md");
    let ast_path = dir.join("ast.txt");
    let expected_path = dir.join("expected.txt");

    let config = load_test_config(&dir);

    // Read input file - preserve line endings exactly
    let input = fs::read_to_string(&input_path)
        .unwrap_or_else(|_| panic!("No input file found in {}", case_name));

    let blocks = parse(&input, config.clone())
        .unwrap_or_else(|e| panic!("parse failed for {}: {}", case_name, e));
    let plain = extract_plain_text(&blocks);

    // Blocks must tile the plain text with no gaps
    let mut expected_start = 0;
    for block in &blocks {
        assert_eq!(block.offset(), expected_start, "gap in {}", case_name);
        expected_start = block.bounds().end;
    }
    assert_eq!(
        plain.chars().count(),
        expected_start,
        "plain text length mismatch for {}",
        case_name
    );

    let ast_output = outline(&blocks);
    if update_ast {
        fs::write(&ast_path, &ast_output).unwrap();
    } else {
        let expected_ast = fs::read_to_string(&ast_path)
            .unwrap_or_else(|_| panic!("Failed to read ast.txt in {}", case_name));
        similar_asserts::assert_eq!(expected_ast, ast_output, "AST mismatch: {}", case_name);
    }

    if update_expected {
        fs::write(&expected_path, &plain).unwrap();
        return;
    }

    let expected = fs::read_to_string(&expected_path)
        .unwrap_or_else(|_| panic!("Failed to read expected.txt in {}", case_name));
    similar_asserts::assert_eq!(expected, plain, "case: {}", case_name);
}

/// Macro to generate individual test functions for each golden case.
///
/// Usage: `golden_test_cases!(case1, case2, case3);`
macro_rules! golden_test_cases {
    ($($case:ident),+ $(,)?) => {
        $(
            #[test]
            fn $case() {
                run_golden_case(stringify!($case));
            }
        )+
    };
}

// To add a new test case:
// 1. Create a new directory under tests/cases/
// 2. Add the directory name to this list
golden_test_cases!(
    code_blocks,
    crlf,
    disabled_rules,
    emphasis,
    fail_soft,
    headers,
    links_and_images,
    lists,
    quotes_and_rules,
    unicode,
);
