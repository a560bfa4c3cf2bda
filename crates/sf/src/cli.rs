//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the sf binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// sf - filter feed exports with boolean keyword expressions
#[derive(Parser, Debug)]
#[command(name = "sf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Verbose output (show scan progress on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a filter expression and print its normalized form
    #[command(alias = "c")]
    Check {
        /// Filter expression (e.g., "blue or green and not red")
        expr: String,
    },

    /// List the search terms of a filter expression
    Terms {
        /// Filter expression
        expr: String,
    },

    /// Scan a feed file and print the posts a filter matches
    #[command(alias = "s")]
    Scan {
        /// Filter expression
        expr: String,

        /// Feed file to scan (JSON Lines, one post per line)
        #[arg(short, long, env = "SF_FEED")]
        feed: Option<PathBuf>,

        /// Limit the number of posts printed
        #[arg(short, long)]
        limit: Option<u32>,

        /// Print the posts the filter does NOT match
        #[arg(long)]
        invert: bool,
    },

    /// View or edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open config in $EDITOR
    Edit,

    /// Print config file path
    Path,
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // This verifies that the CLI is correctly defined
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["sf", "--verbose", "check", "blue"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert!(!cli.json);

        let cli = Cli::parse_from(["sf", "--quiet", "--json", "check", "blue"]);
        assert!(!cli.verbose);
        assert!(cli.quiet);
        assert!(cli.json);
    }

    #[test]
    fn test_no_color_flag() {
        let cli = Cli::parse_from(["sf", "--no-color", "check", "blue"]);
        assert!(cli.no_color);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["sf", "-q", "-v", "check", "blue"]).is_err());
    }

    #[test]
    fn test_check_alias() {
        let cli = Cli::parse_from(["sf", "c", "blue or green"]);
        assert!(matches!(cli.command, Commands::Check { .. }));
    }

    #[test]
    fn test_check_expr() {
        let cli = Cli::parse_from(["sf", "check", "blue or green and not red"]);
        if let Commands::Check { expr } = cli.command {
            assert_eq!(expr, "blue or green and not red");
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_terms() {
        let cli = Cli::parse_from(["sf", "terms", "a and (b or a)"]);
        if let Commands::Terms { expr } = cli.command {
            assert_eq!(expr, "a and (b or a)");
        } else {
            panic!("Expected Terms command");
        }
    }

    #[test]
    fn test_scan_alias() {
        let cli = Cli::parse_from(["sf", "s", "blue"]);
        assert!(matches!(cli.command, Commands::Scan { .. }));
    }

    #[test]
    fn test_scan_with_options() {
        let cli = Cli::parse_from([
            "sf",
            "scan",
            "blue or green",
            "--feed",
            "timeline.jsonl",
            "--limit",
            "10",
            "--invert",
        ]);
        if let Commands::Scan {
            expr,
            feed,
            limit,
            invert,
        } = cli.command
        {
            assert_eq!(expr, "blue or green");
            assert_eq!(feed, Some(PathBuf::from("timeline.jsonl")));
            assert_eq!(limit, Some(10));
            assert!(invert);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_scan_defaults() {
        let cli = Cli::parse_from(["sf", "scan", "blue"]);
        if let Commands::Scan {
            feed,
            limit,
            invert,
            ..
        } = cli.command
        {
            assert_eq!(feed, None);
            assert_eq!(limit, None);
            assert!(!invert);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_scan_limit_rejects_non_numeric() {
        assert!(Cli::try_parse_from(["sf", "scan", "blue", "--limit", "ten"]).is_err());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["sf", "config", "path"]);
        if let Commands::Config { command } = cli.command {
            assert!(matches!(command, Some(ConfigCommands::Path)));
        } else {
            panic!("Expected Config Path command");
        }

        let cli = Cli::parse_from(["sf", "config"]);
        if let Commands::Config { command } = cli.command {
            assert!(command.is_none());
        } else {
            panic!("Expected bare Config command");
        }
    }

    #[test]
    fn test_completions() {
        let cli = Cli::parse_from(["sf", "completions", "zsh"]);
        if let Commands::Completions { shell } = cli.command {
            assert!(matches!(shell, Shell::Zsh));
        } else {
            panic!("Expected Completions command");
        }
    }

    #[test]
    fn test_expr_is_required() {
        assert!(Cli::try_parse_from(["sf", "check"]).is_err());
        assert!(Cli::try_parse_from(["sf", "terms"]).is_err());
        assert!(Cli::try_parse_from(["sf", "scan"]).is_err());
    }
}
