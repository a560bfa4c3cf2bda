use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    match &cli.command {
        Commands::Check { expr } => {
            let opts = commands::check::CheckOptions { expr: expr.clone() };
            commands::check::execute(&ctx, &opts)
        }
        Commands::Terms { expr } => {
            let opts = commands::terms::TermsOptions { expr: expr.clone() };
            commands::terms::execute(&ctx, &opts)
        }
        Commands::Scan {
            expr,
            feed,
            limit,
            invert,
        } => {
            let opts = commands::scan::ScanOptions {
                expr: expr.clone(),
                feed: feed.clone(),
                limit: *limit,
                invert: *invert,
            };
            commands::scan::execute(&ctx, &opts)
        }
        Commands::Config { command } => match command {
            Some(ConfigCommands::Edit) => commands::config::execute_edit(&ctx),
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
            Some(ConfigCommands::Show) | None => commands::config::execute_show(&ctx),
        },
        Commands::Completions { shell } => {
            commands::completions::execute(shell)?;
            Ok(())
        }
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Filter(_) => "SYNTAX_ERROR",
        CommandError::Feed(_) => "FEED_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Filter(_) => ExitCode::from(1),
        CommandError::Feed(_) => ExitCode::from(4),
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}
