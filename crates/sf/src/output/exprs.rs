//! Filter expression output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::check::CheckResult;

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub input: &'a str,
    pub normalized: String,
    pub terms: Vec<&'a str>,
}

/// Formats a check result as JSON.
pub fn format_check_json(result: &CheckResult) -> Result<String, serde_json::Error> {
    let output = CheckOutput {
        input: &result.input,
        normalized: result.filter.to_string(),
        terms: result.filter.terms(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a check result as a human-readable report.
pub fn format_check_table(result: &CheckResult, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    let status = "Valid filter.";
    if use_colors {
        output.push_str(&format!("{}\n", status.green().bold()));
    } else {
        output.push_str(status);
        output.push('\n');
    }

    output.push_str(&format!("Normalized: {}\n", result.filter));

    if verbose {
        output.push_str(&format!("Terms: {}\n", result.filter.terms().join(", ")));
    }

    output
}

/// Formats a term list as JSON.
pub fn format_terms_json(terms: &[&str]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(terms)
}

/// Formats a term list, one term per line.
pub fn format_terms_table(terms: &[&str]) -> String {
    if terms.is_empty() {
        return String::new();
    }

    let mut output = terms.join("\n");
    output.push('\n');
    output
}
