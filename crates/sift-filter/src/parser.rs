//! Recursive descent parser for filter expressions.

use crate::ast::Filter;
use crate::error::{ParseResult, SyntaxError};
use crate::scanner::Scanner;

// Reserved tokens. Everything else is a word.
const LPAREN: &str = "(";
const RPAREN: &str = ")";
const OR: &str = "or";
const AND: &str = "and";
const NOT: &str = "not";

/// Recursive descent parser for the filter language.
///
/// A classic LL(1) parser: one token of lookahead (via [`Scanner`]), one
/// method per grammar production.
///
/// # Grammar
///
/// ```text
/// goal     ::= expr EOF
/// expr     ::= or_expr
/// or_expr  ::= and_expr ( "or" and_expr )*
/// and_expr ::= not_expr ( "and" not_expr )*
/// not_expr ::= "not" not_expr | prim
/// prim     ::= "(" expr ")" | WORD
/// ```
///
/// # Operator Precedence (highest to lowest)
///
/// 1. `( )` - grouping
/// 2. `not` - unary
/// 3. `and` - binary, left-associative
/// 4. `or` - binary, left-associative
///
/// Precedence falls out of the grammar layering itself; there is no
/// precedence table. The binary productions fold left with an explicit loop,
/// so `a or b or c` builds `Or(Or(a, b), c)`, while `not` recurses into
/// itself, so `not not x` builds `Not(Not(x))`. An expression like
/// `blue or green and not red or yellow and purple` therefore groups as
/// `blue or (green and (not red)) or (yellow and purple)`.
///
/// Reserved words are matched case-sensitively and always parse as
/// operators, which makes `and`, `or`, and `not` unusable as search terms;
/// the grammar has no quoting mechanism to escape them.
///
/// # Example
///
/// ```
/// use sift_filter_rs::{Filter, Parser};
///
/// let filter = Parser::parse("blue or green").unwrap();
/// assert!(matches!(filter, Filter::Or(_, _)));
/// ```
pub struct Parser<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Parser<'a> {
    /// Parses a filter expression string into a [`Filter`] tree.
    ///
    /// The parse is total and deterministic: for a fixed input the resulting
    /// tree is always structurally identical.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::UnexpectedEndOfInput`] when the input ends
    /// where a token was required, [`SyntaxError::MissingCloseParen`] when a
    /// group is never closed, and [`SyntaxError::TrailingInput`] when tokens
    /// remain after a complete expression.
    pub fn parse(input: &'a str) -> ParseResult<Filter> {
        let mut parser = Self {
            scanner: Scanner::new(input),
        };

        let filter = parser.expr()?;

        // goal ::= expr EOF
        if parser.scanner.current().is_some() {
            return Err(SyntaxError::TrailingInput);
        }

        Ok(filter)
    }

    /// Whether the current token is exactly `expected`.
    fn check(&self, expected: &str) -> bool {
        self.scanner.current() == Some(expected)
    }

    /// `expr ::= or_expr`
    fn expr(&mut self) -> ParseResult<Filter> {
        self.or_expr()
    }

    /// `or_expr ::= and_expr ( "or" and_expr )*`
    fn or_expr(&mut self) -> ParseResult<Filter> {
        let mut left = self.and_expr()?;

        while self.check(OR) {
            self.scanner.advance();
            let right = self.and_expr()?;
            left = Filter::or(left, right);
        }

        Ok(left)
    }

    /// `and_expr ::= not_expr ( "and" not_expr )*`
    fn and_expr(&mut self) -> ParseResult<Filter> {
        let mut left = self.not_expr()?;

        while self.check(AND) {
            self.scanner.advance();
            let right = self.not_expr()?;
            left = Filter::and(left, right);
        }

        Ok(left)
    }

    /// `not_expr ::= "not" not_expr | prim`
    fn not_expr(&mut self) -> ParseResult<Filter> {
        if self.check(NOT) {
            self.scanner.advance();
            let inner = self.not_expr()?;
            return Ok(Filter::negate(inner));
        }

        self.prim()
    }

    /// `prim ::= "(" expr ")" | WORD`
    ///
    /// Any token that is not `(` is consumed as a word leaf, including a
    /// stray `)`, so the only failure inside this rule is a group that is
    /// never closed.
    fn prim(&mut self) -> ParseResult<Filter> {
        let token = self
            .scanner
            .current()
            .ok_or(SyntaxError::UnexpectedEndOfInput)?;

        if token == LPAREN {
            self.scanner.advance();
            let inner = self.expr()?;
            if !self.check(RPAREN) {
                return Err(SyntaxError::MissingCloseParen);
            }
            self.scanner.advance();
            Ok(inner)
        } else {
            let word = Filter::word(token);
            self.scanner.advance();
            Ok(word)
        }
    }
}

/// Parses a filter expression into a [`Filter`] tree.
///
/// Free-function convenience for [`Parser::parse`].
///
/// # Errors
///
/// See [`Parser::parse`].
///
/// # Example
///
/// ```
/// use sift_filter_rs::parse;
///
/// let filter = parse("blue or green and not red").unwrap();
/// assert_eq!(filter.to_string(), "(blue or (green and (not red)))");
/// ```
pub fn parse(input: &str) -> ParseResult<Filter> {
    Parser::parse(input)
}
