//! Inline images: `![alt](url "title")`.
//!
//! Alt and title are optional. Like links, a span with the outer shape
//! that does not split into parts is reported without parts.

use std::sync::LazyLock;

use regex::Regex;

use super::links::scan_bracketed;
use super::lookahead::Lookahead;
use super::utils::{char_at, is_line_terminator};

static IMAGE_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^!\[([^\r\n]*)\]\(([^\r\n]*?)("[^\r\n]*?")?\)$"#)
        .expect("image pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ImageParts<'a> {
    pub alt: Option<&'a str>,
    pub url: &'a str,
    pub title: Option<&'a str>,
}

fn scan_image(look: &Lookahead<'_>, pos: usize) -> Option<usize> {
    let text = look.text();
    if !text[pos..].starts_with("![") {
        return None;
    }
    let close = scan_bracketed(text, pos + 1)?;
    if text.as_bytes().get(close + 1) != Some(&b'(') {
        return None;
    }

    let url_start = close + 2;
    let first = char_at(text, url_start)?;
    if is_line_terminator(first) {
        return None;
    }

    let target = url_start + first.len_utf8();
    let paren = look.paren_or_break(target);
    if text.as_bytes().get(paren) != Some(&b')') {
        return None;
    }

    // A quote before the `)` opens a title only if a `")` follows on the
    // same line; otherwise it is part of the url. Only the first quote
    // matters since later ones search a suffix of the same line.
    let quote = look.quote(target);
    if quote < paren {
        let title_close = look.title_close(quote + 1);
        if text[title_close..].starts_with("\")") {
            return Some(title_close + 2);
        }
    }
    Some(paren + 1)
}

fn decompose_image(span: &str) -> Option<ImageParts<'_>> {
    let caps = IMAGE_PARTS.captures(span)?;
    let alt = caps.get(1)?.as_str();
    let url = caps.get(2)?.as_str().trim();
    let title = caps.get(3).map(|m| {
        let quoted = m.as_str();
        &quoted[1..quoted.len() - 1]
    });

    Some(ImageParts {
        alt: (!alt.is_empty()).then_some(alt),
        url,
        title,
    })
}

/// Try to parse an image at `pos`.
/// Returns `(end, parts)`; `parts` is `None` when the span is malformed.
pub(crate) fn try_parse_image<'t>(
    look: &Lookahead<'t>,
    pos: usize,
) -> Option<(usize, Option<ImageParts<'t>>)> {
    let text = look.text();
    let end = scan_image(look, pos)?;
    Some((end, decompose_image(&text[pos..end])))
}
