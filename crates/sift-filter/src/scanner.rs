//! Scanner (tokenizer) for filter expressions.

/// Lookahead-one scanner over a filter expression.
///
/// Tokens are plain string slices borrowed from the input; there is no token
/// enum. A token is either a single `(` or `)`, or a maximal run of
/// non-whitespace, non-parenthesis characters. Parentheses are split off even
/// when glued to a word, so `(red)` scans as `(`, `red`, `)`. The parser
/// classifies tokens by comparing them against the reserved words at the
/// point of use.
///
/// # Example
///
/// ```
/// use sift_filter_rs::Scanner;
///
/// let mut scanner = Scanner::new("blue or (green)");
/// assert_eq!(scanner.current(), Some("blue"));
/// assert_eq!(scanner.advance(), Some("or"));
/// assert_eq!(scanner.advance(), Some("("));
/// assert_eq!(scanner.advance(), Some("green"));
/// assert_eq!(scanner.advance(), Some(")"));
/// assert_eq!(scanner.advance(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Unconsumed input, leading whitespace already stripped.
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over the given input.
    ///
    /// The input is never mutated or copied; every token borrows from it.
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input.trim_start(),
        }
    }

    /// Returns the token at the current position without consuming it, or
    /// `None` when the input is exhausted.
    ///
    /// Peeking is pure: two calls with no intervening [`advance`] yield an
    /// identical token.
    ///
    /// [`advance`]: Self::advance
    pub fn current(&self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        if self.rest.starts_with('(') || self.rest.starts_with(')') {
            return Some(&self.rest[..1]);
        }
        let end = self
            .rest
            .find(|c: char| c.is_whitespace() || c == '(' || c == ')')
            .unwrap_or(self.rest.len());
        Some(&self.rest[..end])
    }

    /// Consumes the current token, skips any whitespace after it, and
    /// returns the new current token (`None` at end of input).
    ///
    /// This is the sole consuming operation; callers always receive the next
    /// lookahead token in the same step. Advancing at end of input is a
    /// no-op.
    pub fn advance(&mut self) -> Option<&'a str> {
        if let Some(token) = self.current() {
            self.rest = self.rest[token.len()..].trim_start();
        }
        self.current()
    }
}
