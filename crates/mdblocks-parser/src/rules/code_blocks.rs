//! Fenced code blocks.

use super::lookahead::Lookahead;
use super::utils::{char_at, is_line_start};

const FENCE: &str = "```";

/// Try to parse a fenced code block at `pos`.
/// Returns `(end, content)` where content excludes both fences.
///
/// The opening fence must start a line; the closing fence is the first
/// triple backtick after at least one char of content that ends a line. It
/// does not need to start one, so a single-line "```x```" is a block too.
pub(crate) fn try_parse_code_block<'t>(
    look: &Lookahead<'t>,
    pos: usize,
) -> Option<(usize, &'t str)> {
    let text = look.text();
    if !is_line_start(text, pos) || !text[pos..].starts_with(FENCE) {
        return None;
    }

    let content_start = pos + FENCE.len();
    let first = char_at(text, content_start)?;
    let close = look.closing_fence(content_start + first.len_utf8());
    if close >= text.len() {
        return None;
    }
    Some((close + FENCE.len(), &text[content_start..close]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_block(text: &str, pos: usize) -> Option<(usize, &str)> {
        try_parse_code_block(&Lookahead::new(text), pos)
    }

    #[test]
    fn test_simple_block() {
        assert_eq!(code_block("```\ncode\n```", 0), Some((12, "\ncode\n")));
    }

    #[test]
    fn test_block_with_language_line() {
        let text = "```rust\nfn main() {}\n```\nafter";
        assert_eq!(
            code_block(text, 0),
            Some((24, "rust\nfn main() {}\n"))
        );
    }

    #[test]
    fn test_single_line_block() {
        assert_eq!(code_block("```inline```", 0), Some((12, "inline")));
    }

    #[test]
    fn test_closing_fence_must_end_line() {
        assert_eq!(code_block("```a``` b", 0), None);
    }

    #[test]
    fn test_first_closing_fence_wins() {
        let text = "```\na\n```\n```\nb\n```";
        assert_eq!(code_block(text, 0), Some((9, "\na\n")));
    }

    #[test]
    fn test_longer_fence_closes_on_its_last_three() {
        assert_eq!(code_block("```\na\n````", 0), Some((10, "\na\n`")));
    }

    #[test]
    fn test_block_rejects() {
        assert_eq!(code_block("x ```a```", 2), None);
        assert_eq!(code_block("```\nno close", 0), None);
        assert_eq!(code_block("``````", 0), None);
        assert_eq!(code_block("```", 0), None);
    }
}
