//! Plain-text extraction.

use crate::blocks::MarkdownBlock;
use crate::element::Element;

/// Concatenate the markup-free text of every block.
///
/// The result has exactly as many chars as the last block's `bounds.end`,
/// so block bounds index straight into it.
pub fn extract_plain_text(blocks: &[MarkdownBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        block.write_plain_text(&mut out);
    }
    out
}

/// Quick one-level markup removal for previews.
///
/// Only top-level elements are looked at: plain text is kept verbatim and
/// every other element contributes its own text with `_`, `~` and `*`
/// removed. Unlike [`extract_plain_text`] this does not walk children, so
/// nested link or code markup inside a list item survives.
pub fn strip_markup(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        match element {
            Element::Text { text } => out.push_str(text),
            other => out.extend(
                other
                    .text()
                    .chars()
                    .filter(|c| !matches!(c, '_' | '~' | '*')),
            ),
        }
    }
    out
}
