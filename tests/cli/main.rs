//! CLI integration tests for mdblocks.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand output (parse, text, clear, search)
//! - Stdin/stdout handling
//! - Config discovery
//! - Exit codes and error reporting

mod common;
mod parse;
mod search;
mod text;
