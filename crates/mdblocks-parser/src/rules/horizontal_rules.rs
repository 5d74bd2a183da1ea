//! Horizontal rule lines.

use super::utils::{is_line_end, is_line_start};

/// Try to parse a horizontal rule at `pos`. Returns the end offset.
///
/// A rule is a line holding exactly three chars drawn from `*`, `-` and `_`.
pub(crate) fn try_parse_horizontal_rule(text: &str, pos: usize) -> Option<usize> {
    if !is_line_start(text, pos) {
        return None;
    }
    let marker = text.as_bytes().get(pos..pos + 3)?;
    if !marker.iter().all(|b| matches!(b, b'*' | b'-' | b'_')) {
        return None;
    }

    let end = pos + 3;
    is_line_end(text, end).then_some(end)
}
