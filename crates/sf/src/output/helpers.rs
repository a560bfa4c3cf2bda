//! Common helper functions for output formatting.

/// Truncates an ID to 12 characters for display.
///
/// Feed IDs are arbitrary UTF-8, so this counts characters rather than
/// bytes.
pub fn truncate_id(id: &str) -> String {
    if id.chars().count() > 12 {
        id.chars().take(12).collect()
    } else {
        id.to_string()
    }
}

/// Truncates a string to a maximum number of characters.
///
/// Counts characters rather than bytes so multi-byte UTF-8 text is
/// never split mid-codepoint.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let prefix: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", prefix)
    } else {
        s.to_string()
    }
}

/// Collapses all whitespace runs (including newlines) into single spaces.
///
/// Post text is free-form and often multi-line; table rows must stay on
/// one line.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
