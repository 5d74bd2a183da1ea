//! Parsing for emphasis (*italic*, _italic_, **bold**, __bold__)
//!
//! Rules:
//! - The opener must not be preceded by the delimiter char
//! - The first inner char must not be the delimiter char
//! - The closer is the first matching run not followed by the delimiter char
//! - Content stays on one line, except for a single break right before the closer
//!
//! Italic is tried before bold. A doubled delimiter can never open italic
//! because its second char would be the first inner char.

use super::utils::{Delimited, scan_delimited};

fn shape(delim: u8, count: usize) -> Delimited {
    Delimited {
        delim,
        count,
        leading_whitespace: true,
        trailing_break: true,
    }
}

fn emphasis_delim(text: &str, pos: usize) -> Option<u8> {
    match text.as_bytes().get(pos) {
        Some(&b) if b == b'*' || b == b'_' => Some(b),
        _ => None,
    }
}

/// Try to parse italic at `pos`. Returns `(end, inner)`.
pub(crate) fn try_parse_italic(text: &str, pos: usize) -> Option<(usize, &str)> {
    let delim = emphasis_delim(text, pos)?;
    scan_delimited(text, pos, &shape(delim, 1))
}

/// Try to parse bold at `pos`. Returns `(end, inner)`.
pub(crate) fn try_parse_bold(text: &str, pos: usize) -> Option<(usize, &str)> {
    let delim = emphasis_delim(text, pos)?;
    scan_delimited(text, pos, &shape(delim, 2))
}
