//! List item lines.
//!
//! Each item is a single line. Nested lists are not recognised; the item
//! content is re-parsed for inline markup only.

use super::utils::{is_line_start, line_end};

/// Try to parse an unordered item (`* x`, `+ x`, `- x`) at `pos`.
/// Returns `(end, content)`.
pub(crate) fn try_parse_unordered_item(text: &str, pos: usize) -> Option<(usize, &str)> {
    if !is_line_start(text, pos) {
        return None;
    }
    let bytes = text.as_bytes();
    if !matches!(bytes.get(pos), Some(b'*' | b'+' | b'-')) || bytes.get(pos + 1) != Some(&b' ') {
        return None;
    }

    let content_start = pos + 2;
    let end = line_end(text, content_start);
    if end == content_start {
        return None;
    }
    Some((end, &text[content_start..end]))
}

/// Try to parse an ordered item (`1. x`, `12. x`) at `pos`.
/// Returns `(end, marker, content)` where the marker includes the period.
pub(crate) fn try_parse_ordered_item(text: &str, pos: usize) -> Option<(usize, &str, &str)> {
    if !is_line_start(text, pos) {
        return None;
    }
    let bytes = text.as_bytes();
    let digits = bytes[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let period = pos + digits;
    if bytes.get(period) != Some(&b'.') || bytes.get(period + 1) != Some(&b' ') {
        return None;
    }

    let content_start = period + 2;
    let end = line_end(text, content_start);
    if end == content_start {
        return None;
    }
    Some((end, &text[pos..=period], &text[content_start..end]))
}
