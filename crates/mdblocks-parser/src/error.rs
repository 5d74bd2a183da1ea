//! Error type returned by the parser.

/// Errors that can occur while parsing.
///
/// Malformed markup never produces an error; it degrades to plain text.
/// Only resource limits are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Recursive re-parsing of inner text went deeper than the configured limit.
    NestingTooDeep { limit: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NestingTooDeep { limit } => {
                write!(f, "nesting depth exceeded (limit {})", limit)
            }
        }
    }
}

impl std::error::Error for ParseError {}
