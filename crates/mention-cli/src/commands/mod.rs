//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod extract;
pub mod run;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mention_core::config::OutputFormat;
use mention_core::Config;
use std::path::PathBuf;

/// mention-helper - extract @mentions from comments
#[derive(Debug, Parser)]
#[command(name = "mention-helper")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract mentions from a comment body
    Extract(extract::ExtractArgs),

    /// Run feature scenarios
    Run(run::RunArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Human readable lines
    Plain,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // init may target a --config path that does not exist yet
    let config = match &cli.command {
        Commands::Config(config::ConfigCommand::Init { .. }) => Config::default(),
        _ => load_config(cli.config.as_deref())?,
    };

    // Handle color output
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // Dispatch to command handler
    match cli.command {
        Commands::Extract(args) => extract::execute(args, &config),
        Commands::Run(args) => run::execute(args, &config),
        Commands::Config(cmd) => config::execute(cmd, &config, cli.config.as_deref()),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::discover().context("Failed to load configuration"),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["mention-helper", "-vv", "--no-color", "extract", "@a"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Commands::Extract(_)));
    }
}
