//! A small boolean keyword-filter language for streams of text-bearing
//! items (posts, messages, log lines).
//!
//! A filter string like `blue or green and not red` parses into an immutable
//! [`Filter`] tree, which is then evaluated against any number of items. An
//! item is anything implementing [`Matchable`]; `str` and `String` already
//! do.
//!
//! # Supported Syntax
//!
//! - bare words match items containing them (case-insensitive substring)
//! - `not` - negation
//! - `and` - conjunction
//! - `or` - disjunction
//! - `( )` - grouping
//!
//! Precedence, highest to lowest: parentheses, `not`, `and`, `or`. The
//! reserved words are case-sensitive and cannot themselves be search terms.
//!
//! # Example
//!
//! ```
//! use sift_filter_rs::parse;
//!
//! let filter = parse("blue or green and not red").unwrap();
//!
//! assert!(filter.matches("I love blue skies"));
//! assert!(!filter.matches("green and red mix"));
//! assert!(!filter.matches("yellow sun, purple flower"));
//!
//! // The tree renders fully parenthesized and lists its leaf terms.
//! assert_eq!(filter.to_string(), "(blue or (green and (not red)))");
//! assert_eq!(filter.terms(), vec!["blue", "green", "red"]);
//! ```

mod ast;
mod error;
mod matcher;
mod parser;
mod scanner;

pub use ast::Filter;
pub use error::{ParseResult, SyntaxError};
pub use matcher::Matchable;
pub use parser::{parse, Parser};
pub use scanner::Scanner;
