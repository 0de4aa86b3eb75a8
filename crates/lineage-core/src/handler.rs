//! Builds lineage graph context from an entity's classifications

use crate::context::{AssetContext, GraphContext, Neighbors};
use crate::error::Result;
use crate::instance::EntityDetail;
use crate::validation::{IdentifierValidator, InvalidParameterHandler, GUID_PARAMETER};
use crate::vertex::LineageEntity;
use crate::vocabulary::QualifiedClassifications;
use std::sync::Arc;

const BUILD_METHOD: &str = "buildClassificationEvent";

/// Maps the lineage-qualified classifications of an entity to graph edges
///
/// Every qualifying classification becomes a facet vertex connected to the
/// entity's vertex by an edge labeled with the classification's type name.
#[derive(Debug, Clone)]
pub struct ClassificationHandler<V = InvalidParameterHandler> {
    validator: V,
    vocabulary: Arc<QualifiedClassifications>,
}

impl ClassificationHandler {
    pub fn new(vocabulary: impl Into<Arc<QualifiedClassifications>>) -> Self {
        Self::with_validator(InvalidParameterHandler, vocabulary)
    }
}

impl Default for ClassificationHandler {
    fn default() -> Self {
        Self::new(QualifiedClassifications::default())
    }
}

impl<V: IdentifierValidator> ClassificationHandler<V> {
    pub fn with_validator(
        validator: V,
        vocabulary: impl Into<Arc<QualifiedClassifications>>,
    ) -> Self {
        Self {
            validator,
            vocabulary: vocabulary.into(),
        }
    }

    pub fn vocabulary(&self) -> &QualifiedClassifications {
        &self.vocabulary
    }

    /// Build the classification edges of `entity`, grouped by label
    ///
    /// An entity without classifications yields an empty map. Any failure
    /// aborts the build; no partial graph is returned.
    pub fn build(&self, entity: &EntityDetail) -> Result<Neighbors> {
        self.validator.validate_guid(&entity.guid, GUID_PARAMETER, BUILD_METHOD)?;

        tracing::debug!(
            "Building classification context for {} ({} classifications)",
            entity.guid,
            entity.classifications().len()
        );

        let mut graph = AssetContext::new();
        self.build_graph_context(entity, &mut graph)?;

        tracing::debug!("Built {} edges for {}", graph.edge_count(), entity.guid);
        Ok(graph.into_neighbors())
    }

    fn build_graph_context(&self, entity: &EntityDetail, graph: &mut AssetContext) -> Result<()> {
        let entity_vertex = LineageEntity::from_entity(entity)?;
        graph.add_vertex(entity_vertex.clone());

        for classification in entity.classifications() {
            if !self.vocabulary.is_lineage_qualified(&classification.name) {
                tracing::trace!("Skipping classification {}", classification.name);
                continue;
            }

            let classification_vertex =
                LineageEntity::from_classification(&entity.guid, classification)?;
            graph.add_vertex(classification_vertex.clone());

            let label = classification_vertex.type_def_name().to_string();
            tracing::trace!("Adding {} edge for {}", label, entity.guid);
            graph.add_graph_context(GraphContext::new(
                label,
                entity_vertex.clone(),
                classification_vertex,
            ));
        }

        Ok(())
    }
}
