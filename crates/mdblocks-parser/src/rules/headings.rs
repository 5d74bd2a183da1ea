//! ATX heading lines.

use super::utils::{is_line_start, line_end};

/// Try to parse an ATX heading at `pos`.
/// Returns `(end, level, content)`.
///
/// The run of `#` must be 1-6 long and followed by a space and at least
/// one more char. Trailing `#` are part of the content.
pub(crate) fn try_parse_header(text: &str, pos: usize) -> Option<(usize, u8, &str)> {
    if !is_line_start(text, pos) {
        return None;
    }
    let bytes = text.as_bytes();
    let level = bytes[pos..].iter().take_while(|&&b| b == b'#').count();
    if level == 0 || level > 6 || bytes.get(pos + level) != Some(&b' ') {
        return None;
    }

    let content_start = pos + level + 1;
    let end = line_end(text, content_start);
    if end == content_start {
        return None;
    }
    Some((end, level as u8, &text[content_start..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(try_parse_header("# Hello", 0), Some((7, 1, "Hello")));
        assert_eq!(try_parse_header("### Three", 0), Some((9, 3, "Three")));
        assert_eq!(try_parse_header("###### Six", 0), Some((10, 6, "Six")));
    }

    #[test]
    fn test_too_many_hashes() {
        assert_eq!(try_parse_header("####### Seven", 0), None);
    }

    #[test]
    fn test_requires_space_and_content() {
        assert_eq!(try_parse_header("#Hello", 0), None);
        assert_eq!(try_parse_header("# ", 0), None);
        assert_eq!(try_parse_header("#", 0), None);
    }

    #[test]
    fn test_keeps_trailing_hashes() {
        assert_eq!(try_parse_header("## Title ##", 0), Some((11, 2, "Title ##")));
    }

    #[test]
    fn test_line_anchored() {
        assert_eq!(try_parse_header("text\n# Next\nmore", 5), Some((11, 1, "Next")));
        assert_eq!(try_parse_header("a # b", 2), None);
    }
}
