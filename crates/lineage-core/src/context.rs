//! Lineage edges and the per-build graph accumulator

use crate::vertex::LineageEntity;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Edges grouped by relationship label
pub type Neighbors = BTreeMap<String, BTreeSet<GraphContext>>;

/// A directed, labeled edge between two lineage vertices
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphContext {
    relationship_label: String,
    source_guid: String,
    source_vertex: LineageEntity,
    target_vertex: LineageEntity,
}

impl GraphContext {
    /// Create an edge; the source guid is taken from `source`
    pub fn new(
        relationship_label: impl Into<String>,
        source: LineageEntity,
        target: LineageEntity,
    ) -> Self {
        Self {
            relationship_label: relationship_label.into(),
            source_guid: source.guid().to_string(),
            source_vertex: source,
            target_vertex: target,
        }
    }

    pub fn relationship_label(&self) -> &str {
        &self.relationship_label
    }

    pub fn source_guid(&self) -> &str {
        &self.source_guid
    }

    pub fn source_vertex(&self) -> &LineageEntity {
        &self.source_vertex
    }

    pub fn target_vertex(&self) -> &LineageEntity {
        &self.target_vertex
    }
}

/// Vertices and edges collected while building one entity's lineage
#[derive(Debug, Clone, Default)]
pub struct AssetContext {
    vertices: BTreeSet<LineageEntity>,
    neighbors: Neighbors,
}

impl AssetContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex; returns false if an equal vertex was already present
    pub fn add_vertex(&mut self, vertex: LineageEntity) -> bool {
        self.vertices.insert(vertex)
    }

    /// Add an edge under its relationship label; returns false if already present
    pub fn add_graph_context(&mut self, edge: GraphContext) -> bool {
        self.neighbors
            .entry(edge.relationship_label.clone())
            .or_default()
            .insert(edge)
    }

    pub fn vertices(&self) -> &BTreeSet<LineageEntity> {
        &self.vertices
    }

    pub fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(BTreeSet::len).sum()
    }

    pub fn into_neighbors(self) -> Neighbors {
        self.neighbors
    }
}
