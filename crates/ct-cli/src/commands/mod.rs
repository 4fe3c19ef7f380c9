//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod demo;
pub mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ct_core::config::Config;
use std::path::Path;

/// comment-thread - Nested reply tree demo
#[derive(Debug, Parser)]
#[command(name = "comment-thread")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start an interactive reply session on a seeded thread
    Demo(demo::DemoArgs),

    /// Render a thread JSON file as an indented listing
    Render(render::RenderArgs),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(cli.config.as_deref())?;

    // Dispatch to command handler
    match cli.command {
        Commands::Demo(args) => demo::execute(args, &config),
        Commands::Render(args) => render::execute(args, &config),
    }
}

/// Load configuration from an explicit path, or fall back to defaults
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config = toml::from_str(&raw)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            Ok(config)
        }
        None => Ok(Config::default()),
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
    fn test_render_args_parse() {
        let cli = Cli::parse_from(["comment-thread", "render", "thread.json", "--ids"]);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.file.to_string_lossy(), "thread.json");
                assert!(args.ids);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_load_config_default() {
        let config = load_config(None).unwrap();
        assert_eq!(config.demo.author, "You");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
    }
}
