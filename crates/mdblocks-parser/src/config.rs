//! Parser configuration.

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Default ceiling for recursive re-parsing of inner text.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hard cap on `max_depth`. Each level of nesting is a level of recursion,
/// so larger settings are clamped to keep the stack bounded.
pub const MAX_DEPTH_CEILING: usize = 256;

/// Grammar rule toggles.
///
/// Each field enables one rule of the ordered grammar. Disabling a rule
/// removes it from the matcher list; text it would have matched is then
/// claimed by the next rule in priority order, or stays plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Extensions {
    // ===== Line-anchored rules =====
    /// `* item`, `+ item`, `- item`
    pub unordered_lists: bool,
    /// `# Heading` through `###### Heading`
    pub headers: bool,
    /// `> quoted line`
    pub blockquotes: bool,
    /// `***`, `---`, `___`
    pub horizontal_rules: bool,
    /// `1. item`
    pub ordered_lists: bool,
    /// Triple-backtick fenced blocks
    pub code_blocks: bool,

    // ===== Inline rules =====
    /// `*italic*`, `_italic_`
    pub italic: bool,
    /// `**bold**`, `__bold__`
    pub bold: bool,
    /// `~~strike~~`
    pub strikethrough: bool,
    /// `` `code` ``
    pub inline_code: bool,
    /// `[title](url)`
    pub links: bool,
    /// `![alt](url "title")`
    pub images: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            unordered_lists: true,
            headers: true,
            blockquotes: true,
            horizontal_rules: true,
            ordered_lists: true,
            code_blocks: true,
            italic: true,
            bold: true,
            strikethrough: true,
            inline_code: true,
            links: true,
            images: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Maximum recursion depth for re-parsing inner text, at most
    /// [`MAX_DEPTH_CEILING`].
    pub max_depth: usize,
    pub extensions: Extensions,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            extensions: Extensions::default(),
        }
    }
}
