//! Error type for filter expression parsing.

use thiserror::Error;

/// A specialized Result type for filter parsing operations.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Errors that can occur while parsing a filter expression.
///
/// Parsing is all-or-nothing: the first error aborts the parse and no
/// partial tree is produced. Once a tree exists, evaluating it cannot fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyntaxError {
    /// The input ended where a token was still required.
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,

    /// A parenthesized group was never closed.
    #[error("Expected ')'")]
    MissingCloseParen,

    /// Tokens remained after a complete expression.
    #[error("Extra stuff at end of input")]
    TrailingInput,
}
