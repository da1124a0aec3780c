//! Parse error types
//!
//! Every failure carries the same top-level message; callers distinguish
//! failure categories through [`ParseCause`], not through message text.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// The situational reason a parse failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCause {
    /// No top-level element was ever produced (empty input included).
    #[error("Root Element not found")]
    RootNotFound,

    /// A construct failed to match any recognized token grammar: stray `<`,
    /// bad attribute syntax, unterminated comment/CDATA/DOCTYPE/PI.
    #[error("Not Well-Formed XML")]
    NotWellFormed,

    /// A closing tag disagreed with the element it would close, or end of
    /// input was reached with elements still open (strict mode). The name is
    /// the closing tag text that was expected.
    #[error("Closing tag not matching \"</{0}>\"")]
    ClosingTagMismatch(String),
}

/// Error returned by the parse entry points.
///
/// Displays as the constant `"Failed to parse XML"`; the cause is exposed
/// both as a field and as the standard error source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse XML")]
pub struct ParseError {
    #[source]
    pub cause: ParseCause,
}

impl From<ParseCause> for ParseError {
    fn from(cause: ParseCause) -> Self {
        ParseError { cause }
    }
}
