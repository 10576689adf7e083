//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// relcheck - Release readiness checklist generator.
#[derive(Debug, Parser)]
#[command(name = "relcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .relcheck.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to repository root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// List every checklist item in terminal output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the release checklist (default if no command specified)
    Generate(GenerateArgs),

    /// Show the effective checklist configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// Report path (relative to the repository root unless absolute)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the report instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON summary of all results
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero if any check fails or gate markers remain
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
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
    fn no_args_has_no_command() {
        let cli = Cli::parse_from(["relcheck"]);
        assert!(cli.command.is_none());
        assert!(cli.project.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn generate_flags_parse() {
        let cli = Cli::parse_from([
            "relcheck",
            "generate",
            "--dry-run",
            "--check",
            "--output",
            "out.md",
        ]);
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert!(args.dry_run);
                assert!(args.check);
                assert!(!args.json);
                assert_eq!(args.output, Some(PathBuf::from("out.md")));
            }
            other => panic!("Expected Generate command, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["relcheck", "generate", "--project", "/repo", "--debug"]);
        assert_eq!(cli.project, Some(PathBuf::from("/repo")));
        assert!(cli.debug);
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["relcheck", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn completions_requires_shell() {
        assert!(Cli::try_parse_from(["relcheck", "completions"]).is_err());
        let cli = Cli::parse_from(["relcheck", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Bash }))
        ));
    }
}
