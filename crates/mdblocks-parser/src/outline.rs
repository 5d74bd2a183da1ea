//! Indented one-node-per-line dump of a block list.
//!
//! ```text
//! TEXT@0..12
//!   HEADER level=1 "Hello"
//!   BOLD
//!     TEXT "a "
//! IMAGE@12..13 url="a.png"
//! ```

use std::fmt;

use crate::blocks::MarkdownBlock;
use crate::element::{Element, Image};

/// Display adapter printing blocks in outline form.
pub struct Outline<'a>(pub &'a [MarkdownBlock]);

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in self.0 {
            let bounds = block.bounds();
            match block {
                MarkdownBlock::Text { elements, .. } => {
                    writeln!(f, "TEXT@{}..{}", bounds.start, bounds.end)?;
                    for element in elements {
                        write_element(f, element, 1)?;
                    }
                }
                MarkdownBlock::Image { image, .. } => {
                    write!(f, "IMAGE@{}..{}", bounds.start, bounds.end)?;
                    write_image_attributes(f, image)?;
                    writeln!(f)?;
                }
                MarkdownBlock::Scroll { code, .. } => {
                    writeln!(f, "SCROLL@{}..{} {:?}", bounds.start, bounds.end, code.text)?;
                }
            }
        }
        Ok(())
    }
}

fn write_image_attributes(f: &mut fmt::Formatter<'_>, image: &Image) -> fmt::Result {
    if let Some(alt) = &image.alt {
        write!(f, " alt={:?}", alt)?;
    }
    write!(f, " url={:?}", image.url)?;
    if let Some(title) = &image.title {
        write!(f, " title={:?}", title)?;
    }
    Ok(())
}

fn write_element(f: &mut fmt::Formatter<'_>, element: &Element, depth: usize) -> fmt::Result {
    write!(f, "{:width$}{}", "", element.kind_name(), width = depth * 2)?;

    match element {
        Element::Header { level, .. } => write!(f, " level={}", level)?,
        Element::Link { url, .. } => write!(f, " url={:?}", url)?,
        Element::OrderedListItem { order, .. } => write!(f, " order={:?}", order)?,
        Element::Image(image) => write_image_attributes(f, image)?,
        Element::Text { .. }
        | Element::UnorderedListItem { .. }
        | Element::Quote { .. }
        | Element::Italic { .. }
        | Element::Bold { .. }
        | Element::Strike { .. }
        | Element::Rule
        | Element::InlineCode { .. }
        | Element::BlockCode(_) => {}
    }

    match element {
        Element::Image(_) => writeln!(f)?,
        leaf if leaf.is_leaf() => writeln!(f, " {:?}", leaf.text())?,
        parent => {
            writeln!(f)?;
            for child in parent.children() {
                write_element(f, child, depth + 1)?;
            }
        }
    }
    Ok(())
}

/// Render blocks in outline form.
pub fn outline(blocks: &[MarkdownBlock]) -> String {
    Outline(blocks).to_string()
}
