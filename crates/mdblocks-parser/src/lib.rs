//! Markdown-subset parser producing render blocks with plain-text offsets.
//!
//! Parsing runs in two stages. The scanner matches an ordered set of rules
//! against the input and yields a flat list of [`Element`]s, re-parsing the
//! inner text of recursive constructs. The segmenter then folds that list
//! into [`MarkdownBlock`]s: merged text runs, images and scrollable code
//! blocks, each carrying its char range in the flattened plain text.
//!
//! ```rust
//! use mdblocks_parser::{extract_plain_text, parse};
//!
//! let blocks = parse("# Hello\n**a *b* c**").unwrap();
//! assert_eq!(extract_plain_text(&blocks), "Hello\na b c");
//! assert_eq!(blocks.last().unwrap().bounds().end, 11);
//! ```

pub mod blocks;
pub mod config;
pub mod element;
pub mod error;
pub mod outline;
pub mod parser;
pub mod rules;
pub mod text;

pub use blocks::{Bounds, MarkdownBlock, block_at, segment};
pub use config::{DEFAULT_MAX_DEPTH, Extensions, MAX_DEPTH_CEILING, ParserConfig};
pub use element::{CodeBlock, Element, Image};
pub use error::ParseError;
pub use outline::{Outline, outline};
pub use parser::Parser;
pub use rules::RuleKind;
pub use text::{extract_plain_text, strip_markup};

/// Parse `input` into render blocks with the default configuration.
///
/// Empty input yields no blocks. Input without markup yields a single text
/// block holding one text element.
pub fn parse(input: &str) -> Result<Vec<MarkdownBlock>, ParseError> {
    parse_with_config(input, &ParserConfig::default())
}

pub fn parse_with_config(
    input: &str,
    config: &ParserConfig,
) -> Result<Vec<MarkdownBlock>, ParseError> {
    let elements = Parser::new(config).parse(input)?;
    Ok(segment(elements))
}

/// Run only the scanner and return the flat element list.
pub fn parse_elements(input: &str, config: &ParserConfig) -> Result<Vec<Element>, ParseError> {
    Parser::new(config).parse(input)
}

/// Parse `input` and strip markup from its top-level elements.
/// See [`strip_markup`].
pub fn clear(input: &str, config: &ParserConfig) -> Result<String, ParseError> {
    let elements = Parser::new(config).parse(input)?;
    Ok(strip_markup(&elements))
}
