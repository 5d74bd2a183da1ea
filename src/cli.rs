use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdblocks")]
#[command(author, version)]
#[command(about = "Split Markdown into text, image and code blocks with plain-text offsets")]
#[command(
    long_about = "mdblocks parses a small Markdown subset (headers, lists, quotes, emphasis, \
    strikethrough, inline and fenced code, links, images and horizontal rules) into render \
    blocks. Each block records the range it occupies in the document's plain text, so search \
    hits in the plain text can be mapped back onto the blocks that display them."
)]
#[command(after_help = "\
EXAMPLES:

    # Show the block outline of a file
    mdblocks parse notes.md

    # Same, as JSON
    mdblocks parse --json notes.md

    # Extract plain text from stdin
    echo '# Heading' | mdblocks text

    # Find a word and show which blocks hold it
    mdblocks search rust notes.md

CONFIGURATION:

mdblocks looks for configuration files in this order:
  1. Explicit --config path
  2. mdblocks.toml or .mdblocks.toml in current/parent directories
  3. ~/.config/mdblocks/config.toml (XDG)
  4. Built-in defaults

Example .mdblocks.toml:

    max_depth = 64

    [extensions]
    strikethrough = false

    [search]
    case_sensitive = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, mdblocks will \
        search for .mdblocks.toml or mdblocks.toml in the current directory and its parents, \
        then fall back to ~/.config/mdblocks/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a document and display its blocks
    #[command(
        long_about = "Parse a document and print its render blocks, one node per line. Text \
        blocks list their elements indented by nesting depth; image and code blocks are shown \
        on a single line. Every block is labelled with its plain-text range."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Outline of a file
    mdblocks parse notes.md

    # Outline from stdin
    echo '**bold** text' | mdblocks parse

    # Machine-readable output
    mdblocks parse --json notes.md")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Print blocks as JSON
        #[arg(long)]
        #[arg(help = "Print blocks as JSON instead of the outline")]
        json: bool,
    },
    /// Print the plain text of a document
    #[command(
        long_about = "Print the document with all recognised markup removed. Images become a \
        single space and fenced code keeps its content. Block ranges shown by `parse` index \
        into this text."
    )]
    Text {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Print a quick preview with top-level markup stripped
    #[command(
        long_about = "Print a preview of the document. Only top-level elements are processed: \
        their text is kept with `_`, `~` and `*` removed, while markup nested inside them is \
        left as written."
    )]
    Clear {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Search the plain text of a document
    #[command(
        long_about = "Search the plain text of a document for a literal query. Matches may \
        overlap. Each match is printed with its absolute range followed by the block-relative \
        fragments it covers."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Case-insensitive search
    mdblocks search rust notes.md

    # Case-sensitive search from stdin
    cat notes.md | mdblocks search --case-sensitive Rust

OUTPUT:

    12..16
      block 0 12..16")]
    Search {
        /// Text to look for
        #[arg(help = "Literal text to search for")]
        query: String,

        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Match case exactly
        #[arg(long)]
        #[arg(help = "Match case exactly (overrides the config file)")]
        case_sensitive: bool,
    },
}
