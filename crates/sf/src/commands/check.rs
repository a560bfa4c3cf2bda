//! Check command implementation.
//!
//! Parse a filter expression and report its normalized form.

use sift_filter_rs::{parse, Filter};

use super::{CommandContext, Result};
use crate::output;

/// Options for the check command.
pub struct CheckOptions {
    /// Raw filter expression.
    pub expr: String,
}

/// A successfully checked expression, consumed by the output layer.
pub struct CheckResult {
    /// The expression as the user typed it.
    pub input: String,
    /// The parsed filter tree.
    pub filter: Filter,
}

/// Executes the check command.
pub fn execute(ctx: &CommandContext, opts: &CheckOptions) -> Result<()> {
    let filter = parse(&opts.expr)?;

    let result = CheckResult {
        input: opts.expr.clone(),
        filter,
    };

    if ctx.json_output {
        println!("{}", output::format_check_json(&result)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            output::format_check_table(&result, ctx.use_colors, ctx.verbose)
        );
    }

    Ok(())
}
