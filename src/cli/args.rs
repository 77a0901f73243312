//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// cloudenv - Look up Azure cloud environments by name.
#[derive(Debug, Parser)]
#[command(name = "cloudenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides <project>/.cloudenv.yml)
    #[arg(short, long, global = true, env = "CLOUDENV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Print data only, no headers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve an environment name and show its endpoints
    Show(ShowArgs),

    /// List known environments and their aliases
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Environment name (falls back to $AZURE_ENVIRONMENT, then config, then "public")
    pub name: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_name() {
        let cli = Cli::parse_from(["cloudenv", "show", "china", "--json"]);
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.name.as_deref(), Some("china"));
                assert!(args.json);
            }
            other => panic!("Expected Show command, got {:?}", other),
        }
    }

    #[test]
    fn show_name_is_optional() {
        let cli = Cli::parse_from(["cloudenv", "show"]);
        match cli.command {
            Commands::Show(args) => assert!(args.name.is_none()),
            other => panic!("Expected Show command, got {:?}", other),
        }
    }

    #[test]
    fn show_accepts_empty_name() {
        let cli = Cli::parse_from(["cloudenv", "show", ""]);
        match cli.command {
            Commands::Show(args) => assert_eq!(args.name.as_deref(), Some("")),
            other => panic!("Expected Show command, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["cloudenv", "list", "--quiet", "--debug"]);
        assert!(cli.quiet);
        assert!(cli.debug);
    }

    #[test]
    fn parses_completions_shell() {
        let cli = Cli::parse_from(["cloudenv", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Commands::Completions(CompletionsArgs { shell: Shell::Zsh })
        ));
    }
}
