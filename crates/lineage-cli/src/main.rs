//! Lineage CLI - Build classification lineage from metadata entities

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{build, completions, config as config_cmd, vocabulary};
use config::{config_file_path, Config};
use lineage_core::QualifiedClassifications;

#[derive(Parser)]
#[command(name = "lineage")]
#[command(author, version, about = "Classification lineage for metadata entities")]
pub struct Cli {
    /// Config file
    #[arg(long, global = true, env = "LINEAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Lineage-qualified classification (repeatable, replaces the configured set)
    #[arg(long = "classification", global = true)]
    pub classifications: Vec<String>,

    /// Output format: table, json
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config_file_path)
    }

    /// Vocabulary from the command line, or from the config file
    pub fn vocabulary(&self) -> anyhow::Result<QualifiedClassifications> {
        if !self.classifications.is_empty() {
            return Ok(self.classifications.iter().cloned().collect());
        }
        Ok(Config::load(&self.config_path())?.qualified_classifications)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build lineage edges for entities read from a JSON file
    Build(build::BuildArgs),
    /// Inspect the lineage-qualified classification vocabulary
    Vocabulary(vocabulary::VocabularyArgs),
    /// Manage configuration
    Config(config_cmd::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting lineage CLI");

    match &cli.command {
        Commands::Build(args) => build::run(args, &cli)?,
        Commands::Vocabulary(args) => vocabulary::run(args, &cli)?,
        Commands::Config(args) => config_cmd::run(args, &cli)?,
        Commands::Completions(args) => completions::run(args)?,
    }

    Ok(())
}
