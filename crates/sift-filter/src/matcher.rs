//! The item seam between filter trees and whatever is being filtered.

/// An item a [`Filter`](crate::Filter) can be tested against.
///
/// The only capability a word leaf needs is "does this item contain this
/// term". Implementors expose the text to search; the provided
/// [`contains_term`](Self::contains_term) applies the fixed matching policy,
/// a case-insensitive substring test over that text. An implementor whose
/// notion of containment differs (whole-token match, hashtag-aware, ...) can
/// override `contains_term` and keep the same seam.
///
/// `str` and `String` implement the trait, so plain text can be matched
/// directly:
///
/// ```
/// use sift_filter_rs::Matchable;
///
/// assert!("I love blue skies".contains_term("Blue"));
/// assert!(!"green fields".contains_term("blue"));
/// ```
pub trait Matchable {
    /// The text a word filter searches.
    fn text(&self) -> &str;

    /// Whether the item's text contains `term`, ignoring case.
    fn contains_term(&self, term: &str) -> bool {
        self.text().to_lowercase().contains(&term.to_lowercase())
    }
}

impl Matchable for str {
    fn text(&self) -> &str {
        self
    }
}

impl Matchable for String {
    fn text(&self) -> &str {
        self
    }
}
