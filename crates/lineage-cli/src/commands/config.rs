//! Config command for managing CLI configuration

use clap::{Args, Subcommand};

use crate::config::Config;
use crate::Cli;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Show the effective configuration
    Show,
    /// Initialize default config file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs, cli: &Cli) -> anyhow::Result<()> {
    match &args.command {
        ConfigCommands::Path => {
            println!("{}", cli.config_path().display());
            Ok(())
        }
        ConfigCommands::Show => run_show(cli),
        ConfigCommands::Init { force } => run_init(cli, *force),
    }
}

fn run_show(cli: &Cli) -> anyhow::Result<()> {
    let config = Config {
        qualified_classifications: cli.vocabulary()?,
    };
    print!("{}", config.to_toml()?);
    Ok(())
}

fn run_init(cli: &Cli, force: bool) -> anyhow::Result<()> {
    let path = cli.config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default().save(&path)?;
    tracing::info!("Wrote default config to {:?}", path);
    println!("Created config file at {}", path.display());
    Ok(())
}
