//! Parsing for inline code spans (`code`)

use super::utils::{Delimited, scan_delimited};

const CODE_SPAN: Delimited = Delimited {
    delim: b'`',
    count: 1,
    leading_whitespace: false,
    trailing_break: false,
};

/// Try to parse a single-backtick code span at `pos`.
/// Returns `(end, code_content)`.
///
/// The content must not start with whitespace or a backtick and cannot span
/// lines. It may end with whitespace. Double backticks inside are kept as
/// content.
pub(crate) fn try_parse_code_span(text: &str, pos: usize) -> Option<(usize, &str)> {
    scan_delimited(text, pos, &CODE_SPAN)
}
