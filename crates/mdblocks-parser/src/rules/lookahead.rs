//! Memoized forward searches shared by the rules during one scan.
//!
//! Openers that fail (an unclosed `[a](x` repeated along a line, say) would
//! each rescan to the end of the line. Every search here remembers the last
//! span it proved free of its target, and a later query starting inside that
//! span is answered without scanning. The scanner visits openers left to
//! right, so each byte is examined a bounded number of times per search.

use std::cell::Cell;

use super::utils::is_line_end;

const FENCE: &[u8] = b"```";

/// One memoized search: no target starts in `from..stop`, and `stop` is the
/// target position or the search limit.
#[derive(Default)]
struct Memo(Cell<Option<(usize, usize)>>);

impl Memo {
    fn find(&self, from: usize, scan: impl FnOnce(usize) -> usize) -> usize {
        if let Some((start, stop)) = self.0.get()
            && start <= from
            && from <= stop
        {
            return stop;
        }
        let stop = scan(from);
        self.0.set(Some((from, stop)));
        stop
    }
}

pub(crate) struct Lookahead<'t> {
    text: &'t str,
    paren_or_break: Memo,
    quote: Memo,
    title_close: Memo,
    closing_fence: Memo,
}

impl<'t> Lookahead<'t> {
    pub(crate) fn new(text: &'t str) -> Self {
        Self {
            text,
            paren_or_break: Memo::default(),
            quote: Memo::default(),
            title_close: Memo::default(),
            closing_fence: Memo::default(),
        }
    }

    pub(crate) fn text(&self) -> &'t str {
        self.text
    }

    /// First `)`, `\n` or `\r` at or after `from`, or the text length.
    pub(crate) fn paren_or_break(&self, from: usize) -> usize {
        let bytes = self.text.as_bytes();
        self.paren_or_break.find(from, |from| {
            bytes[from..]
                .iter()
                .position(|&b| matches!(b, b')' | b'\n' | b'\r'))
                .map_or(bytes.len(), |offset| from + offset)
        })
    }

    /// First `"` at or after `from`, or the text length.
    pub(crate) fn quote(&self, from: usize) -> usize {
        let bytes = self.text.as_bytes();
        self.quote.find(from, |from| {
            bytes[from..]
                .iter()
                .position(|&b| b == b'"')
                .map_or(bytes.len(), |offset| from + offset)
        })
    }

    /// Start of the first `")` on the line at or after `from`. When there is
    /// none, the position of the line break (or text length) instead.
    pub(crate) fn title_close(&self, from: usize) -> usize {
        let bytes = self.text.as_bytes();
        self.title_close.find(from, |from| {
            let mut cursor = from;
            while let Some(&b) = bytes.get(cursor) {
                match b {
                    b'\n' | b'\r' => return cursor,
                    b'"' if bytes.get(cursor + 1) == Some(&b')') => return cursor,
                    _ => cursor += 1,
                }
            }
            bytes.len()
        })
    }

    /// Start of the first triple backtick at or after `from` that ends a
    /// line, or the text length.
    pub(crate) fn closing_fence(&self, from: usize) -> usize {
        let text = self.text;
        let bytes = text.as_bytes();
        self.closing_fence.find(from, |from| {
            let mut cursor = from;
            while cursor < bytes.len() {
                if bytes[cursor..].starts_with(FENCE) && is_line_end(text, cursor + FENCE.len()) {
                    return cursor;
                }
                cursor += 1;
            }
            bytes.len()
        })
    }
}
