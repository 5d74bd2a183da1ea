//! The scanner: turns text into a flat list of elements.
//!
//! Recursive constructs re-run the scanner on their inner text. Each
//! recursive call works on its own substring; no state is shared between
//! calls other than the read-only rule list.

use crate::config::{MAX_DEPTH_CEILING, ParserConfig};
use crate::element::{CodeBlock, Element, Image};
use crate::error::ParseError;
use crate::rules::{Capture, Lookahead, RuleKind, RuleMatch, is_trigger};


pub struct Parser {
    rules: Vec<RuleKind>,
    max_depth: usize,
}

impl Parser {
    pub fn new(config: &ParserConfig) -> Self {
        let rules = RuleKind::ALL
            .into_iter()
            .filter(|rule| rule.is_enabled(&config.extensions))
            .collect();
        if config.max_depth > MAX_DEPTH_CEILING {
            log::warn!(
                "max_depth {} is above the ceiling, using {}",
                config.max_depth,
                MAX_DEPTH_CEILING
            );
        }
        Self {
            rules,
            max_depth: config.max_depth.min(MAX_DEPTH_CEILING),
        }
    }

    /// Rules in the order they are tried.
    pub fn rules(&self) -> &[RuleKind] {
        &self.rules
    }

    /// The nesting limit in effect.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse `input` into a flat list of top-level elements.
    pub fn parse(&self, input: &str) -> Result<Vec<Element>, ParseError> {
        self.parse_at_depth(input, 0)
    }

    fn parse_at_depth(&self, text: &str, depth: usize) -> Result<Vec<Element>, ParseError> {
        if depth > self.max_depth {
            log::debug!("Nesting limit {} exceeded", self.max_depth);
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        let look = Lookahead::new(text);
        let mut elements = Vec::new();
        let mut cursor = 0;

        while let Some((start, rule, found)) = self.find_next(&look, cursor) {
            if cursor < start {
                elements.push(plain(&text[cursor..start]));
            }
            log::trace!(
                "Matched {} at {}..{} (depth {})",
                rule.name(),
                start,
                found.end,
                depth
            );
            let span = &text[start..found.end];
            elements.push(self.build(found.capture, span, depth)?);
            cursor = found.end;
        }

        if cursor < text.len() {
            elements.push(plain(&text[cursor..]));
        }
        Ok(elements)
    }

    /// Earliest match at or after `from`; ties go to the first rule.
    fn find_next<'t>(
        &self,
        look: &Lookahead<'t>,
        from: usize,
    ) -> Option<(usize, RuleKind, RuleMatch<'t>)> {
        let text = look.text();
        let bytes = text.as_bytes();
        for (offset, _) in text[from..].char_indices() {
            let pos = from + offset;
            if !is_trigger(bytes[pos]) {
                continue;
            }
            for &rule in &self.rules {
                if let Some(found) = rule.try_match(look, pos) {
                    return Some((pos, rule, found));
                }
            }
        }
        None
    }

    fn children(&self, inner: &str, depth: usize) -> Result<Vec<Element>, ParseError> {
        self.parse_at_depth(inner, depth + 1)
    }

    fn build(&self, capture: Capture<'_>, span: &str, depth: usize) -> Result<Element, ParseError> {
        let element = match capture {
            Capture::UnorderedListItem(inner) => Element::UnorderedListItem {
                text: inner.to_string(),
                children: self.children(inner, depth)?,
            },
            Capture::Header { level, text } => Element::Header {
                level,
                text: text.to_string(),
            },
            Capture::Quote(inner) => Element::Quote {
                text: inner.to_string(),
                children: self.children(inner, depth)?,
            },
            Capture::Italic(inner) => Element::Italic {
                text: inner.to_string(),
                children: self.children(inner, depth)?,
            },
            Capture::Bold(inner) => Element::Bold {
                text: inner.to_string(),
                children: self.children(inner, depth)?,
            },
            Capture::Strike(inner) => Element::Strike {
                text: inner.to_string(),
                children: self.children(inner, depth)?,
            },
            Capture::HorizontalRule => Element::Rule,
            Capture::InlineCode(code) => Element::InlineCode {
                text: code.to_string(),
            },
            Capture::Link { title, url } => Element::Link {
                url: url.to_string(),
                text: title.to_string(),
            },
            Capture::OrderedListItem { order, text } => Element::OrderedListItem {
                order: order.to_string(),
                text: text.to_string(),
                children: self.children(text, depth)?,
            },
            Capture::BlockCode(code) => Element::BlockCode(CodeBlock {
                text: code.to_string(),
            }),
            Capture::Image { alt, url, title } => Element::Image(Image {
                alt: alt.map(str::to_string),
                url: url.to_string(),
                title: title.map(str::to_string),
            }),
            Capture::Malformed => {
                log::debug!("Keeping malformed span as text: {:?}", span);
                plain(span)
            }
        };
        Ok(element)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

fn plain(text: &str) -> Element {
    Element::Text {
        text: text.to_string(),
    }
}
