//! Build command - lineage edges for entities in a JSON file

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde_json::Value;

use crate::output::{format_lineage, EntityLineage, OutputFormat};
use crate::Cli;
use lineage_core::{ClassificationHandler, EntityDetail};

#[derive(Args)]
pub struct BuildArgs {
    /// Input file with one entity or an array of entities ('-' for stdin)
    pub file: PathBuf,

    /// Report failing entities and continue with the rest
    #[arg(long)]
    pub keep_going: bool,
}

/// Split the input into entity records: an array is a batch, anything else one record
fn split_records(input: Value) -> Vec<Value> {
    match input {
        Value::Array(records) => records,
        record => vec![record],
    }
}

fn read_records(path: &Path) -> anyhow::Result<Vec<Value>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    let input: Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    Ok(split_records(input))
}

/// Guid of a record for error reports, even when the record does not parse
fn record_guid(record: &Value) -> &str {
    record.get("guid").and_then(Value::as_str).unwrap_or_default()
}

fn build_record(
    handler: &ClassificationHandler,
    record: Value,
) -> lineage_core::Result<EntityLineage> {
    let entity: EntityDetail = serde_json::from_value(record)?;
    let neighbors = handler.build(&entity)?;
    Ok(EntityLineage {
        guid: entity.guid,
        neighbors,
    })
}

pub fn run(args: &BuildArgs, cli: &Cli) -> anyhow::Result<()> {
    let records = read_records(&args.file)?;
    let total = records.len();
    let handler = ClassificationHandler::new(cli.vocabulary()?);

    tracing::info!(
        "Building lineage for {} entities with {} qualified classifications",
        total,
        handler.vocabulary().len()
    );

    let mut results = Vec::with_capacity(total);
    let mut failures = 0;

    for (index, record) in records.into_iter().enumerate() {
        let guid = record_guid(&record).to_string();
        match build_record(&handler, record) {
            Ok(lineage) => results.push(lineage),
            Err(e) if args.keep_going => {
                tracing::warn!("Skipping entity {} ({:?}): {}", index, guid, e);
                eprintln!("entity {} ({:?}): {}", index, guid, e);
                failures += 1;
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to build lineage for entity {}", index)));
            }
        }
    }

    let format = OutputFormat::from(cli.format.as_str());
    println!("{}", format_lineage(&results, format)?);

    if failures > 0 {
        anyhow::bail!("{} of {} entities failed", failures, total);
    }

    Ok(())
}
