//! Output formatting utilities

use std::fmt::Write;

use lineage_core::Neighbors;
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Lineage built for one entity
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityLineage {
    pub guid: String,
    pub neighbors: Neighbors,
}

/// Format lineage results based on format type
pub fn format_lineage(results: &[EntityLineage], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Table => Ok(format_table(results)),
    }
}

fn format_table(results: &[EntityLineage]) -> String {
    let mut out = String::new();
    for result in results {
        let edge_count: usize = result.neighbors.values().map(|e| e.len()).sum();
        let _ = writeln!(out, "{} ({} edges)", result.guid, edge_count);

        for (label, edges) in &result.neighbors {
            for edge in edges {
                let target = edge.target_vertex();
                let properties = target
                    .properties()
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(
                    out,
                    "  {} -[{}]-> {} v{} {{{}}}",
                    edge.source_guid(),
                    label,
                    target.guid(),
                    target.version(),
                    properties
                );
            }
        }
    }
    out
}
