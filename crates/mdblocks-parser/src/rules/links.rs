//! Inline links: `[title](url)`.
//!
//! Matching happens in two steps. A cheap scan finds the outer
//! bracket/paren shape, then a stricter pattern splits the span into title
//! and url. A span that has the shape but does not split is reported with
//! no parts so the caller can keep it as plain text.

use std::sync::LazyLock;

use regex::Regex;

use super::lookahead::Lookahead;
use super::utils::{char_at, is_line_start, is_line_terminator};

static LINK_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\r\n]*)\]\(([^\r\n]*)\)").expect("link pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LinkParts<'a> {
    pub title: &'a str,
    pub url: &'a str,
}

/// Find the `]` closing a bracket opened at `open`.
///
/// The bracketed text may span lines but may not contain another `[`.
pub(crate) fn scan_bracketed(text: &str, open: usize) -> Option<usize> {
    let mut cursor = open + 1;
    loop {
        let ch = char_at(text, cursor)?;
        match ch {
            ']' => return Some(cursor),
            '[' => return None,
            _ => cursor += ch.len_utf8(),
        }
    }
}

/// Scan to the first `)` after at least one char of target, on one line.
fn scan_target(look: &Lookahead<'_>, start: usize) -> Option<usize> {
    let text = look.text();
    let first = char_at(text, start)?;
    if is_line_terminator(first) {
        return None;
    }
    closing_paren(look, start + first.len_utf8())
}

/// End of the target when a `)` comes before the line break.
fn closing_paren(look: &Lookahead<'_>, from: usize) -> Option<usize> {
    let stop = look.paren_or_break(from);
    (look.text().as_bytes().get(stop) == Some(&b')')).then_some(stop + 1)
}

/// `[title](url)` anywhere.
fn scan_inline_link(look: &Lookahead<'_>, pos: usize) -> Option<usize> {
    let text = look.text();
    if text.as_bytes().get(pos) != Some(&b'[') {
        return None;
    }
    let close = scan_bracketed(text, pos)?;
    if text.as_bytes().get(close + 1) != Some(&b'(') {
        return None;
    }
    scan_target(look, close + 2)
}

/// Degenerate `[[](…)` / `](…)` shape, only at line start. The target may
/// be empty.
fn scan_bare_link(look: &Lookahead<'_>, pos: usize) -> Option<usize> {
    let text = look.text();
    if !is_line_start(text, pos) {
        return None;
    }
    let bytes = text.as_bytes();
    let close = pos + bytes[pos..].iter().take_while(|&&b| b == b'[').count();
    if bytes.get(close) != Some(&b']') || bytes.get(close + 1) != Some(&b'(') {
        return None;
    }
    closing_paren(look, close + 2)
}

fn decompose_link(span: &str) -> Option<LinkParts<'_>> {
    let caps = LINK_PARTS.captures(span)?;
    Some(LinkParts {
        title: caps.get(1)?.as_str(),
        url: caps.get(2)?.as_str(),
    })
}

/// Try to parse a link at `pos`.
/// Returns `(end, parts)`; `parts` is `None` when the span is malformed.
pub(crate) fn try_parse_link<'t>(
    look: &Lookahead<'t>,
    pos: usize,
) -> Option<(usize, Option<LinkParts<'t>>)> {
    let text = look.text();
    let end = scan_inline_link(look, pos).or_else(|| scan_bare_link(look, pos))?;
    Some((end, decompose_link(&text[pos..end])))
}
