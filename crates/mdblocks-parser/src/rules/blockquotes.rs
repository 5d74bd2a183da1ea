//! Blockquote lines (`> text`).

use super::utils::{is_line_start, line_end};

/// Try to parse a quoted line at `pos`. Returns `(end, content)`.
pub(crate) fn try_parse_quote(text: &str, pos: usize) -> Option<(usize, &str)> {
    if !is_line_start(text, pos) || !text[pos..].starts_with("> ") {
        return None;
    }

    let content_start = pos + 2;
    let end = line_end(text, content_start);
    if end == content_start {
        return None;
    }
    Some((end, &text[content_start..end]))
}
