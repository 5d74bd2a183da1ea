//! Parsing for strikeout (~~strikethrough~~)
//!
//! Same adjacency rules as bold: exactly two tildes on each side, none
//! directly outside the span and none as the first inner char.

use super::utils::{Delimited, scan_delimited};

const STRIKE: Delimited = Delimited {
    delim: b'~',
    count: 2,
    leading_whitespace: true,
    trailing_break: true,
};

/// Try to parse strikeout at `pos`. Returns `(end, inner)`.
pub(crate) fn try_parse_strikeout(text: &str, pos: usize) -> Option<(usize, &str)> {
    scan_delimited(text, pos, &STRIKE)
}
