//! Filter expression tree.

use std::fmt;

use crate::matcher::Matchable;

/// A parsed filter expression.
///
/// `Filter` is a closed tree of boolean combinators over leaf keyword
/// matches. A tree is built once by the parser and never mutated afterwards;
/// it holds no interior mutability, so a shared reference (or an
/// `Arc<Filter>`) can be used from any number of threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Matches items containing the word.
    Word(String),

    /// Logical AND of two filters.
    And(Box<Filter>, Box<Filter>),

    /// Logical OR of two filters.
    Or(Box<Filter>, Box<Filter>),

    /// Logical NOT of a filter.
    Not(Box<Filter>),
}

impl Filter {
    /// Creates a word (leaf) filter.
    ///
    /// # Example
    ///
    /// ```
    /// use sift_filter_rs::Filter;
    ///
    /// let filter = Filter::word("blue");
    /// assert!(matches!(filter, Filter::Word(_)));
    /// ```
    pub fn word(term: impl Into<String>) -> Self {
        Filter::Word(term.into())
    }

    /// Creates an AND filter from two filters.
    ///
    /// # Example
    ///
    /// ```
    /// use sift_filter_rs::Filter;
    ///
    /// let filter = Filter::and(Filter::word("blue"), Filter::word("sky"));
    /// assert!(matches!(filter, Filter::And(_, _)));
    /// ```
    pub fn and(left: Filter, right: Filter) -> Self {
        Filter::And(Box::new(left), Box::new(right))
    }

    /// Creates an OR filter from two filters.
    ///
    /// # Example
    ///
    /// ```
    /// use sift_filter_rs::Filter;
    ///
    /// let filter = Filter::or(Filter::word("blue"), Filter::word("green"));
    /// assert!(matches!(filter, Filter::Or(_, _)));
    /// ```
    pub fn or(left: Filter, right: Filter) -> Self {
        Filter::Or(Box::new(left), Box::new(right))
    }

    /// Creates a NOT filter from another filter.
    ///
    /// # Example
    ///
    /// ```
    /// use sift_filter_rs::Filter;
    ///
    /// let filter = Filter::negate(Filter::word("red"));
    /// assert!(matches!(filter, Filter::Not(_)));
    /// ```
    pub fn negate(inner: Filter) -> Self {
        Filter::Not(Box::new(inner))
    }

    /// Tests the filter against an item.
    ///
    /// Word leaves ask the item whether it contains their term (see
    /// [`Matchable`]); the boolean nodes combine their children's results.
    /// Evaluation is side-effect-free and never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use sift_filter_rs::parse;
    ///
    /// let filter = parse("blue or green and not red").unwrap();
    /// assert!(filter.matches("I love blue skies"));
    /// assert!(!filter.matches("green and red mix"));
    /// ```
    pub fn matches<M: Matchable + ?Sized>(&self, item: &M) -> bool {
        match self {
            Filter::Word(term) => item.contains_term(term),
            Filter::And(left, right) => left.matches(item) && right.matches(item),
            Filter::Or(left, right) => left.matches(item) || right.matches(item),
            Filter::Not(inner) => !inner.matches(item),
        }
    }

    /// Returns every leaf word in the tree in left-to-right order,
    /// duplicates preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use sift_filter_rs::parse;
    ///
    /// let filter = parse("a and (b or a)").unwrap();
    /// assert_eq!(filter.terms(), vec!["a", "b", "a"]);
    /// ```
    pub fn terms(&self) -> Vec<&str> {
        let mut terms = Vec::new();
        self.collect_terms(&mut terms);
        terms
    }

    fn collect_terms<'a>(&'a self, terms: &mut Vec<&'a str>) {
        match self {
            Filter::Word(term) => terms.push(term),
            Filter::And(left, right) | Filter::Or(left, right) => {
                left.collect_terms(terms);
                right.collect_terms(terms);
            }
            Filter::Not(inner) => inner.collect_terms(terms),
        }
    }
}

/// Renders the fully parenthesized infix form.
///
/// Every binary node and every `not` is wrapped in its own parentheses,
/// words render bare. The rendering is exact: reparsing it always rebuilds a
/// structurally identical tree.
impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Word(term) => write!(f, "{}", term),
            Filter::And(left, right) => write!(f, "({} and {})", left, right),
            Filter::Or(left, right) => write!(f, "({} or {})", left, right),
            Filter::Not(inner) => write!(f, "(not {})", inner),
        }
    }
}
