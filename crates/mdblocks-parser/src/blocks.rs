//! Folding elements into render blocks with running plain-text offsets.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::element::{CodeBlock, Element, Image, PLACEHOLDER};

/// A half-open char range `start..end` in the flattened plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Bounds {
    pub start: usize,
    pub end: usize,
}

impl Bounds {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Convert an absolute offset into one relative to `start`.
    pub fn relative(&self, offset: usize) -> Option<usize> {
        (self.start..=self.end)
            .contains(&offset)
            .then(|| offset - self.start)
    }

    /// Overlap of two ranges, if any.
    pub fn intersect(&self, other: Bounds) -> Option<Bounds> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then(|| Bounds::new(start, end))
    }
}

/// A render-level unit.
///
/// Images and code blocks get blocks of their own; every run of other
/// elements is merged into one text block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum MarkdownBlock {
    Text {
        bounds: Bounds,
        elements: Vec<Element>,
    },
    Image {
        bounds: Bounds,
        image: Image,
    },
    Scroll {
        bounds: Bounds,
        code: CodeBlock,
    },
}

impl MarkdownBlock {
    pub fn bounds(&self) -> Bounds {
        match self {
            MarkdownBlock::Text { bounds, .. }
            | MarkdownBlock::Image { bounds, .. }
            | MarkdownBlock::Scroll { bounds, .. } => *bounds,
        }
    }

    /// Running char count of all preceding blocks.
    pub fn offset(&self) -> usize {
        self.bounds().start
    }

    pub fn write_plain_text(&self, out: &mut String) {
        match self {
            MarkdownBlock::Text { elements, .. } => {
                for element in elements {
                    element.write_plain_text(out);
                }
            }
            MarkdownBlock::Image { .. } => out.push_str(PLACEHOLDER),
            MarkdownBlock::Scroll { code, .. } => out.push_str(&code.text),
        }
    }

    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }
}

/// Fold a flat element list into blocks.
///
/// Each block starts where the previous one ends; the first starts at 0.
pub fn segment(elements: Vec<Element>) -> Vec<MarkdownBlock> {
    let mut blocks: Vec<MarkdownBlock> = Vec::new();

    for element in elements {
        let offset = blocks.last().map_or(0, |block| block.bounds().end);
        match element {
            Element::Image(image) => blocks.push(MarkdownBlock::Image {
                bounds: Bounds::new(offset, offset + PLACEHOLDER.chars().count()),
                image,
            }),
            Element::BlockCode(code) => blocks.push(MarkdownBlock::Scroll {
                bounds: Bounds::new(offset, offset + code.len()),
                code,
            }),
            element => {
                let len = element.plain_len();
                if let Some(MarkdownBlock::Text { bounds, elements }) = blocks.last_mut() {
                    bounds.end += len;
                    elements.push(element);
                } else {
                    blocks.push(MarkdownBlock::Text {
                        bounds: Bounds::new(offset, offset + len),
                        elements: vec![element],
                    });
                }
            }
        }
    }

    blocks
}

/// Index of the block holding the absolute plain-text `offset`.
pub fn block_at(blocks: &[MarkdownBlock], offset: usize) -> Option<usize> {
    let index = blocks.partition_point(|block| block.bounds().end <= offset);
    (index < blocks.len() && blocks[index].bounds().contains(offset)).then_some(index)
}
