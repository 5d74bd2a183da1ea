//! Position helpers shared by the rule matchers.
//!
//! All positions are byte offsets into the text being scanned and always sit
//! on a char boundary.

/// Line terminators recognised by the line-anchored rules.
pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// True if `pos` is at the start of the text or right after a line break.
/// A `\r\n` pair counts as one break.
pub(crate) fn is_line_start(text: &str, pos: usize) -> bool {
    if pos == 0 {
        return true;
    }
    let bytes = text.as_bytes();
    match bytes[pos - 1] {
        b'\n' => true,
        b'\r' => bytes.get(pos) != Some(&b'\n'),
        _ => false,
    }
}

/// True if `pos` is at the end of the text or right before a line break.
pub(crate) fn is_line_end(text: &str, pos: usize) -> bool {
    matches!(text.as_bytes().get(pos), None | Some(b'\n') | Some(b'\r'))
}

/// Byte offset of the end of the line containing `pos`.
pub(crate) fn line_end(text: &str, pos: usize) -> usize {
    text[pos..]
        .find(is_line_terminator)
        .map_or(text.len(), |offset| pos + offset)
}

pub(crate) fn char_at(text: &str, pos: usize) -> Option<char> {
    text.get(pos..)?.chars().next()
}

pub(crate) fn char_before(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

/// Shape of a span wrapped in a run of identical ASCII delimiters,
/// such as `*x*`, `__x__` or `` `x` ``.
pub(crate) struct Delimited {
    pub delim: u8,
    pub count: usize,
    /// Whether the first inner char may be whitespace.
    pub leading_whitespace: bool,
    /// Whether a line break may sit directly before the closer.
    pub trailing_break: bool,
}

/// Scan a delimited span starting at `pos`.
///
/// The opener must not be preceded by the delimiter and the first inner
/// char must not be the delimiter. The closer is the first run of `count`
/// delimiters that is not followed by another one. Apart from the optional
/// break right before the closer, the span stays on one line.
///
/// Returns `(end, inner)`.
pub(crate) fn scan_delimited<'a>(
    text: &'a str,
    pos: usize,
    shape: &Delimited,
) -> Option<(usize, &'a str)> {
    let bytes = text.as_bytes();
    let delim = shape.delim;

    if pos > 0 && bytes[pos - 1] == delim {
        return None;
    }
    if bytes.len() < pos + shape.count || bytes[pos..pos + shape.count].iter().any(|&b| b != delim)
    {
        return None;
    }

    let content_start = pos + shape.count;
    let first = char_at(text, content_start)?;
    if first == delim as char || (!shape.leading_whitespace && first.is_whitespace()) {
        return None;
    }

    let closes_at = |i: usize| {
        i + shape.count <= bytes.len()
            && bytes[i..i + shape.count].iter().all(|&b| b == delim)
            && bytes.get(i + shape.count) != Some(&delim)
    };

    let mut cursor = content_start + first.len_utf8();
    loop {
        if closes_at(cursor) {
            return Some((cursor + shape.count, &text[content_start..cursor]));
        }
        let ch = char_at(text, cursor)?;
        let next = cursor + ch.len_utf8();
        if is_line_terminator(ch) {
            if shape.trailing_break && closes_at(next) {
                return Some((next + shape.count, &text[content_start..next]));
            }
            return None;
        }
        cursor = next;
    }
}
