pub mod config;
pub mod search;

pub use config::Config;
pub use config::ConfigBuilder;
pub use config::SearchConfig;
pub use mdblocks_parser::{
    Bounds, CodeBlock, Element, Image, MarkdownBlock, ParseError, extract_plain_text, outline,
};
pub use search::{BlockHit, SearchHit, find_matches, locate, search};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a markdown document into render blocks.
///
/// # Examples
///
/// ```rust
/// use mdblocks::{extract_plain_text, parse};
///
/// let blocks = parse("# Heading\n- item *one*", None).unwrap();
/// assert_eq!(extract_plain_text(&blocks), "Heading\nitem one");
/// ```
///
/// # Arguments
///
/// * `input` - The markdown content to parse
/// * `config` - Optional configuration (defaults to default config)
pub fn parse(input: &str, config: Option<Config>) -> Result<Vec<MarkdownBlock>, ParseError> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    mdblocks_parser::parse_with_config(input, &config.parser)
}

/// Parses a document and strips markup from its top-level elements only.
///
/// This is the quick preview form: plain text runs are kept as they are and
/// every other element contributes its text with `_`, `~` and `*` removed.
pub fn clear(input: &str, config: Option<Config>) -> Result<String, ParseError> {
    let config = config.unwrap_or_default();
    mdblocks_parser::clear(input, &config.parser)
}
