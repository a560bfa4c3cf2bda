//! Terms command implementation.
//!
//! Parse a filter expression and list the search terms of its leaves.

use sift_filter_rs::parse;

use super::{CommandContext, Result};
use crate::output;

/// Options for the terms command.
pub struct TermsOptions {
    /// Raw filter expression.
    pub expr: String,
}

/// Executes the terms command.
///
/// Terms are printed in left-to-right tree order with duplicates kept,
/// so the output mirrors the structure of the expression.
pub fn execute(ctx: &CommandContext, opts: &TermsOptions) -> Result<()> {
    let filter = parse(&opts.expr)?;
    let terms = filter.terms();

    if ctx.json_output {
        println!("{}", output::format_terms_json(&terms)?);
    } else if !ctx.quiet {
        print!("{}", output::format_terms_table(&terms));
    }

    Ok(())
}
