//! Vocabulary commands

use clap::{Args, Subcommand};

use crate::output::OutputFormat;
use crate::Cli;

#[derive(Args)]
pub struct VocabularyArgs {
    #[command(subcommand)]
    pub command: VocabularyCommands,
}

#[derive(Subcommand)]
pub enum VocabularyCommands {
    /// List lineage-qualified classification names
    List,
    /// Check whether a classification name is lineage-qualified
    Check {
        /// Classification name
        name: String,
    },
}

pub fn run(args: &VocabularyArgs, cli: &Cli) -> anyhow::Result<()> {
    let vocabulary = cli.vocabulary()?;

    match &args.command {
        VocabularyCommands::List => match OutputFormat::from(cli.format.as_str()) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vocabulary)?),
            OutputFormat::Table => {
                for name in vocabulary.names() {
                    println!("{}", name);
                }
            }
        },
        VocabularyCommands::Check { name } => {
            if vocabulary.is_lineage_qualified(name) {
                println!("{} is lineage-qualified", name);
            } else {
                println!("{} is not lineage-qualified", name);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
