//! Parsed markdown elements.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Text carried by elements that have no textual content of their own
/// (horizontal rules and images). It keeps them one char wide in the
/// flattened plain text.
pub const PLACEHOLDER: &str = " ";

/// A node of the parse tree.
///
/// Recursive variants (list items, quotes, italic, bold, strike) keep the
/// inner text between their delimiters in `text` and the result of
/// re-parsing that text in `children`. Every other variant is a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Element {
    /// Unstructured text
    Text { text: String },

    /// `* item`, `+ item` or `- item`
    UnorderedListItem { text: String, children: Vec<Element> },

    /// ATX heading with level 1-6
    Header { level: u8, text: String },

    /// `> quote`
    Quote { text: String, children: Vec<Element> },

    /// `*italic*` or `_italic_`
    Italic { text: String, children: Vec<Element> },

    /// `**bold**` or `__bold__`
    Bold { text: String, children: Vec<Element> },

    /// `~~strike~~`
    Strike { text: String, children: Vec<Element> },

    /// Horizontal rule
    Rule,

    /// `` `code` ``, kept verbatim
    InlineCode { text: String },

    /// `[text](url)`
    Link { url: String, text: String },

    /// `1. item`; `order` is the literal marker, e.g. `"1."`
    OrderedListItem {
        order: String,
        text: String,
        children: Vec<Element>,
    },

    /// Fenced code block
    BlockCode(CodeBlock),

    /// `![alt](url "title")`
    Image(Image),
}

/// Content of a fenced code block, fences excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CodeBlock {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Image {
    pub alt: Option<String>,
    pub url: String,
    pub title: Option<String>,
}

impl CodeBlock {
    /// Length in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Element {
    /// The element's own text span.
    ///
    /// For recursive variants this still contains any nested markup; use
    /// [`Element::plain_text`] for the de-markupped content.
    pub fn text(&self) -> &str {
        match self {
            Element::Text { text }
            | Element::UnorderedListItem { text, .. }
            | Element::Header { text, .. }
            | Element::Quote { text, .. }
            | Element::Italic { text, .. }
            | Element::Bold { text, .. }
            | Element::Strike { text, .. }
            | Element::InlineCode { text }
            | Element::Link { text, .. }
            | Element::OrderedListItem { text, .. } => text,
            Element::BlockCode(code) => &code.text,
            Element::Rule | Element::Image(_) => PLACEHOLDER,
        }
    }

    /// Nested elements produced by re-parsing the inner text.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::UnorderedListItem { children, .. }
            | Element::Quote { children, .. }
            | Element::Italic { children, .. }
            | Element::Bold { children, .. }
            | Element::Strike { children, .. }
            | Element::OrderedListItem { children, .. } => children,
            Element::Text { .. }
            | Element::Header { .. }
            | Element::Rule
            | Element::InlineCode { .. }
            | Element::Link { .. }
            | Element::BlockCode(_)
            | Element::Image(_) => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Upper-case name used in outlines and log messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Text { .. } => "TEXT",
            Element::UnorderedListItem { .. } => "UNORDERED_LIST_ITEM",
            Element::Header { .. } => "HEADER",
            Element::Quote { .. } => "QUOTE",
            Element::Italic { .. } => "ITALIC",
            Element::Bold { .. } => "BOLD",
            Element::Strike { .. } => "STRIKE",
            Element::Rule => "RULE",
            Element::InlineCode { .. } => "INLINE_CODE",
            Element::Link { .. } => "LINK",
            Element::OrderedListItem { .. } => "ORDERED_LIST_ITEM",
            Element::BlockCode(_) => "BLOCK_CODE",
            Element::Image(_) => "IMAGE",
        }
    }

    /// Append the markup-free text of this element to `out`.
    ///
    /// Leaves contribute their own text; other nodes contribute only their
    /// children, so delimiters never reach the output.
    pub fn write_plain_text(&self, out: &mut String) {
        if self.is_leaf() {
            out.push_str(self.text());
        } else {
            for child in self.children() {
                child.write_plain_text(out);
            }
        }
    }

    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    /// Char length of [`Element::plain_text`], computed without allocating.
    pub fn plain_len(&self) -> usize {
        if self.is_leaf() {
            self.text().chars().count()
        } else {
            self.children().iter().map(Element::plain_len).sum()
        }
    }
}
