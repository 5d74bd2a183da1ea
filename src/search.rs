//! Query search over the plain text of parsed blocks.
//!
//! Matches are found in the flattened plain text and then mapped back onto
//! the blocks that hold them, so a renderer can highlight each fragment
//! relative to its own block.

use regex::RegexBuilder;
use serde::Serialize;

use mdblocks_parser::{Bounds, MarkdownBlock, extract_plain_text};

use crate::config::SearchConfig;

/// The part of a match that falls inside one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockHit {
    /// Index of the block in the block list.
    pub block: usize,
    /// Start relative to the block's `bounds.start`.
    pub start: usize,
    /// End relative to the block's `bounds.start`.
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Absolute char range in the plain text.
    pub range: Bounds,
    /// One fragment per block the range touches, in block order.
    pub fragments: Vec<BlockHit>,
}

/// All occurrences of `query` in `haystack`, as char ranges.
///
/// Occurrences may overlap: after each match the search resumes one char
/// past its start. An empty query or haystack finds nothing.
pub fn find_matches(haystack: &str, query: &str, case_sensitive: bool) -> Vec<Bounds> {
    if haystack.is_empty() || query.is_empty() {
        return Vec::new();
    }

    let regex = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(!case_sensitive)
        .build()
    {
        Ok(regex) => regex,
        Err(e) => {
            log::warn!("Cannot search for {:?}: {}", query, e);
            return Vec::new();
        }
    };

    let mut hits = Vec::new();
    let mut from = 0;
    // Char count of haystack[..counted_to]; starts only move forward.
    let mut counted_to = 0;
    let mut chars_before = 0;

    while let Some(found) = regex.find_at(haystack, from) {
        chars_before += haystack[counted_to..found.start()].chars().count();
        counted_to = found.start();

        let start = chars_before;
        let end = start + found.as_str().chars().count();
        hits.push(Bounds::new(start, end));

        match haystack[found.start()..].chars().next() {
            Some(c) => from = found.start() + c.len_utf8(),
            None => break,
        }
    }

    log::debug!("Found {} match(es) for {:?}", hits.len(), query);
    hits
}

/// Split an absolute range into block-relative fragments.
///
/// Blocks the range does not overlap are skipped, as are empty blocks.
pub fn locate(blocks: &[MarkdownBlock], range: Bounds) -> Vec<BlockHit> {
    let first = blocks.partition_point(|block| block.bounds().end <= range.start);

    blocks[first..]
        .iter()
        .enumerate()
        .take_while(|(_, block)| block.bounds().start < range.end)
        .filter_map(|(i, block)| {
            let bounds = block.bounds();
            let overlap = bounds.intersect(range)?;
            Some(BlockHit {
                block: first + i,
                start: overlap.start - bounds.start,
                end: overlap.end - bounds.start,
            })
        })
        .collect()
}

/// Find `query` in the plain text of `blocks` and map each match onto blocks.
pub fn search(blocks: &[MarkdownBlock], query: &str, config: &SearchConfig) -> Vec<SearchHit> {
    let plain = extract_plain_text(blocks);
    find_matches(&plain, query, config.case_sensitive)
        .into_iter()
        .map(|range| SearchHit {
            range,
            fragments: locate(blocks, range),
        })
        .collect()
}
