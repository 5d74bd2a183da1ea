//! The ordered grammar.
//!
//! Each rule is an independent matcher tried at a given position. The
//! scanner walks positions left to right and, at each one, tries the
//! enabled rules in [`RuleKind::ALL`] order; the first success wins.

use crate::config::Extensions;

mod blockquotes;
mod code_blocks;
mod code_spans;
mod emphasis;
mod headings;
mod horizontal_rules;
mod images;
mod links;
mod lists;
mod lookahead;
mod strikeout;
pub(crate) mod utils;

use blockquotes::try_parse_quote;
use code_blocks::try_parse_code_block;
use code_spans::try_parse_code_span;
use emphasis::{try_parse_bold, try_parse_italic};
use headings::try_parse_header;
use horizontal_rules::try_parse_horizontal_rule;
use images::try_parse_image;
use links::try_parse_link;
use lists::{try_parse_ordered_item, try_parse_unordered_item};
use strikeout::try_parse_strikeout;

pub(crate) use lookahead::Lookahead;

/// One rule of the grammar. Declaration order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    UnorderedListItem,
    Header,
    Quote,
    Italic,
    Bold,
    Strike,
    HorizontalRule,
    InlineCode,
    Link,
    OrderedListItem,
    BlockCode,
    Image,
}

/// What a rule captured, borrowed from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Capture<'a> {
    UnorderedListItem(&'a str),
    Header { level: u8, text: &'a str },
    Quote(&'a str),
    Italic(&'a str),
    Bold(&'a str),
    Strike(&'a str),
    HorizontalRule,
    InlineCode(&'a str),
    Link { title: &'a str, url: &'a str },
    OrderedListItem { order: &'a str, text: &'a str },
    BlockCode(&'a str),
    Image {
        alt: Option<&'a str>,
        url: &'a str,
        title: Option<&'a str>,
    },
    /// The span has the outer shape of a link or image but its interior
    /// does not decompose.
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuleMatch<'a> {
    pub end: usize,
    pub capture: Capture<'a>,
}

impl RuleKind {
    pub const ALL: [RuleKind; 12] = [
        RuleKind::UnorderedListItem,
        RuleKind::Header,
        RuleKind::Quote,
        RuleKind::Italic,
        RuleKind::Bold,
        RuleKind::Strike,
        RuleKind::HorizontalRule,
        RuleKind::InlineCode,
        RuleKind::Link,
        RuleKind::OrderedListItem,
        RuleKind::BlockCode,
        RuleKind::Image,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleKind::UnorderedListItem => "unordered list item",
            RuleKind::Header => "header",
            RuleKind::Quote => "quote",
            RuleKind::Italic => "italic",
            RuleKind::Bold => "bold",
            RuleKind::Strike => "strike",
            RuleKind::HorizontalRule => "horizontal rule",
            RuleKind::InlineCode => "inline code",
            RuleKind::Link => "link",
            RuleKind::OrderedListItem => "ordered list item",
            RuleKind::BlockCode => "block code",
            RuleKind::Image => "image",
        }
    }

    pub fn is_enabled(self, extensions: &Extensions) -> bool {
        match self {
            RuleKind::UnorderedListItem => extensions.unordered_lists,
            RuleKind::Header => extensions.headers,
            RuleKind::Quote => extensions.blockquotes,
            RuleKind::Italic => extensions.italic,
            RuleKind::Bold => extensions.bold,
            RuleKind::Strike => extensions.strikethrough,
            RuleKind::HorizontalRule => extensions.horizontal_rules,
            RuleKind::InlineCode => extensions.inline_code,
            RuleKind::Link => extensions.links,
            RuleKind::OrderedListItem => extensions.ordered_lists,
            RuleKind::BlockCode => extensions.code_blocks,
            RuleKind::Image => extensions.images,
        }
    }

    /// Try this rule at `pos` in the text behind `look`.
    pub(crate) fn try_match<'t>(self, look: &Lookahead<'t>, pos: usize) -> Option<RuleMatch<'t>> {
        let text = look.text();
        let (end, capture) = match self {
            RuleKind::UnorderedListItem => {
                let (end, content) = try_parse_unordered_item(text, pos)?;
                (end, Capture::UnorderedListItem(content))
            }
            RuleKind::Header => {
                let (end, level, content) = try_parse_header(text, pos)?;
                (
                    end,
                    Capture::Header {
                        level,
                        text: content,
                    },
                )
            }
            RuleKind::Quote => {
                let (end, content) = try_parse_quote(text, pos)?;
                (end, Capture::Quote(content))
            }
            RuleKind::Italic => {
                let (end, inner) = try_parse_italic(text, pos)?;
                (end, Capture::Italic(inner))
            }
            RuleKind::Bold => {
                let (end, inner) = try_parse_bold(text, pos)?;
                (end, Capture::Bold(inner))
            }
            RuleKind::Strike => {
                let (end, inner) = try_parse_strikeout(text, pos)?;
                (end, Capture::Strike(inner))
            }
            RuleKind::HorizontalRule => (
                try_parse_horizontal_rule(text, pos)?,
                Capture::HorizontalRule,
            ),
            RuleKind::InlineCode => {
                let (end, code) = try_parse_code_span(text, pos)?;
                (end, Capture::InlineCode(code))
            }
            RuleKind::Link => {
                let (end, parts) = try_parse_link(look, pos)?;
                let capture = parts.map_or(Capture::Malformed, |p| Capture::Link {
                    title: p.title,
                    url: p.url,
                });
                (end, capture)
            }
            RuleKind::OrderedListItem => {
                let (end, order, content) = try_parse_ordered_item(text, pos)?;
                (
                    end,
                    Capture::OrderedListItem {
                        order,
                        text: content,
                    },
                )
            }
            RuleKind::BlockCode => {
                let (end, code) = try_parse_code_block(look, pos)?;
                (end, Capture::BlockCode(code))
            }
            RuleKind::Image => {
                let (end, parts) = try_parse_image(look, pos)?;
                let capture = parts.map_or(Capture::Malformed, |p| Capture::Image {
                    alt: p.alt,
                    url: p.url,
                    title: p.title,
                });
                (end, capture)
            }
        };
        Some(RuleMatch { end, capture })
    }
}

/// Bytes that can begin a match of some rule.
pub(crate) fn is_trigger(byte: u8) -> bool {
    matches!(
        byte,
        b'*' | b'+' | b'-' | b'#' | b'>' | b'_' | b'~' | b'`' | b'[' | b']' | b'!'
    ) || byte.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match(text: &str, pos: usize) -> Option<(RuleKind, RuleMatch<'_>)> {
        let look = Lookahead::new(text);
        RuleKind::ALL
            .into_iter()
            .find_map(|rule| rule.try_match(&look, pos).map(|m| (rule, m)))
    }

    #[test]
    fn test_list_beats_italic() {
        let (rule, m) = first_match("* item *x*", 0).unwrap();
        assert_eq!(rule, RuleKind::UnorderedListItem);
        assert_eq!(m.capture, Capture::UnorderedListItem("item *x*"));
    }

    #[test]
    fn test_rule_line_is_not_a_list() {
        let (rule, m) = first_match("***", 0).unwrap();
        assert_eq!(rule, RuleKind::HorizontalRule);
        assert_eq!(m.end, 3);
    }

    #[test]
    fn test_bold_when_italic_cannot_open() {
        let (rule, m) = first_match("**b**", 0).unwrap();
        assert_eq!(rule, RuleKind::Bold);
        assert_eq!(m.capture, Capture::Bold("b"));
    }

    #[test]
    fn test_fence_is_block_code_not_inline_code() {
        let (rule, _) = first_match("```\nx\n```", 0).unwrap();
        assert_eq!(rule, RuleKind::BlockCode);
    }

    #[test]
    fn test_malformed_link_capture() {
        let (rule, m) = first_match("[a\nb](u)", 0).unwrap();
        assert_eq!(rule, RuleKind::Link);
        assert_eq!(m.capture, Capture::Malformed);
        assert_eq!(m.end, 8);
    }

    #[test]
    fn test_disabled_rules() {
        let extensions = Extensions {
            bold: false,
            ..Extensions::default()
        };
        assert!(!RuleKind::Bold.is_enabled(&extensions));
        assert!(RuleKind::Italic.is_enabled(&extensions));
    }

    #[test]
    fn test_all_is_priority_order() {
        assert_eq!(RuleKind::ALL[0], RuleKind::UnorderedListItem);
        assert_eq!(RuleKind::ALL[11], RuleKind::Image);
        assert_eq!(RuleKind::ALL.len(), 12);
    }

    #[test]
    fn test_triggers() {
        for b in b"*+-#>_~`[]!0123456789" {
            assert!(is_trigger(*b));
        }
        assert!(!is_trigger(b'a'));
        assert!(!is_trigger(b' '));
    }
}
