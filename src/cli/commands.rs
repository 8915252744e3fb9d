//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query user accounts from the command line
#[derive(Parser, Debug)]
#[command(name = "geddit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Maximum items per listing page
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Cursor of the page to start after
    #[arg(long, global = true)]
    pub after: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a user's profile
    About { username: String },

    /// List a user's posts and comments
    Overview { username: String },

    /// List a user's posts
    Posts { username: String },

    /// List a user's comments
    Comments { username: String },

    /// List a user's trophies
    Trophies { username: String },

    /// Check whether a username is free
    Available { username: String },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overview() {
        let cli = Cli::parse_from([
            "geddit",
            "--config",
            "geddit.yaml",
            "--limit",
            "10",
            "overview",
            "spez",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("geddit.yaml")));
        assert_eq!(cli.limit, Some(10));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Overview { ref username } if username == "spez"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["geddit", "trophies", "spez", "--format", "pretty"]);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::Trophies { .. }));
    }

    #[test]
    fn test_username_required() {
        assert!(Cli::try_parse_from(["geddit", "about"]).is_err());
    }
}
