//! Lineage vertex types and their construction from metadata instances

use crate::error::{Error, Result};
use crate::instance::{Classification, EntityDetail};
use crate::properties;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// What a lineage vertex was derived from
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum VertexKind {
    /// The entity itself
    Entity,
    /// A classification of the entity; shares the entity's guid
    ClassificationFacet { classification_name: String },
}

/// A vertex in the lineage graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageEntity {
    guid: String,
    kind: VertexKind,
    type_def_name: String,
    version: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update_time: Option<DateTime<Utc>>,
    properties: BTreeMap<String, String>,
}

impl LineageEntity {
    /// Build the vertex representing an entity
    ///
    /// The entity's type name is copied when present and left empty otherwise.
    pub fn from_entity(entity: &EntityDetail) -> Result<Self> {
        Ok(Self {
            guid: entity.guid.clone(),
            kind: VertexKind::Entity,
            type_def_name: entity
                .type_def
                .as_ref()
                .map(|t| t.type_def_name.clone())
                .unwrap_or_default(),
            version: entity.version,
            created_by: entity.created_by.clone(),
            updated_by: entity.updated_by.clone(),
            create_time: entity.create_time,
            update_time: entity.update_time,
            properties: properties::normalize(entity.properties.as_ref())?,
        })
    }

    /// Build the facet vertex for one classification of the entity `entity_guid`
    ///
    /// The vertex takes the entity's guid; type, version and audit fields come
    /// from the classification.
    pub fn from_classification(entity_guid: &str, classification: &Classification) -> Result<Self> {
        let type_def_name = classification.type_def_name().ok_or_else(|| {
            Error::MissingTypeDefinition {
                classification: classification.name.clone(),
            }
        })?;

        Ok(Self {
            guid: entity_guid.to_string(),
            kind: VertexKind::ClassificationFacet {
                classification_name: classification.name.clone(),
            },
            type_def_name: type_def_name.to_string(),
            version: classification.version,
            created_by: classification.created_by.clone(),
            updated_by: classification.updated_by.clone(),
            create_time: classification.create_time,
            update_time: classification.update_time,
            properties: properties::normalize(classification.properties.as_ref())?,
        })
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    pub fn kind(&self) -> &VertexKind {
        &self.kind
    }

    pub fn type_def_name(&self) -> &str {
        &self.type_def_name
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn updated_by(&self) -> Option<&str> {
        self.updated_by.as_deref()
    }

    pub fn create_time(&self) -> Option<DateTime<Utc>> {
        self.create_time
    }

    pub fn update_time(&self) -> Option<DateTime<Utc>> {
        self.update_time
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn is_facet(&self) -> bool {
        matches!(self.kind, VertexKind::ClassificationFacet { .. })
    }

    /// True if this is a classification facet of `root`
    pub fn is_facet_of(&self, root: &LineageEntity) -> bool {
        self.is_facet() && root.kind == VertexKind::Entity && self.guid == root.guid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{InstanceType, PropertyValue};
    use chrono::TimeZone;

    #[test]
    fn test_entity_vertex() {
        let entity = EntityDetail::new("e1")
            .with_type("DataFile")
            .with_property("name", PropertyValue::string("weekly.csv"));

        let vertex = LineageEntity::from_entity(&entity).unwrap();
        assert_eq!(vertex.guid(), "e1");
        assert_eq!(vertex.kind(), &VertexKind::Entity);
        assert_eq!(vertex.type_def_name(), "DataFile");
        assert_eq!(vertex.properties()["name"], "weekly.csv");
        assert!(!vertex.is_facet());
    }

    #[test]
    fn test_untyped_entity_vertex() {
        let vertex = LineageEntity::from_entity(&EntityDetail::new("e1")).unwrap();
        assert_eq!(vertex.type_def_name(), "");
        assert!(vertex.properties().is_empty());
    }

    #[test]
    fn test_classification_vertex_takes_entity_guid() {
        let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut classification = Classification::new("Confidentiality")
            .with_version(7)
            .with_property("level", PropertyValue::string("3"));
        classification.created_by = Some("garygeeke".to_string());
        classification.create_time = Some(created);

        let root = LineageEntity::from_entity(&EntityDetail::new("e1")).unwrap();
        let facet = LineageEntity::from_classification("e1", &classification).unwrap();

        assert_eq!(facet.guid(), "e1");
        assert_eq!(facet.type_def_name(), "Confidentiality");
        assert_eq!(facet.version(), 7);
        assert_eq!(facet.created_by(), Some("garygeeke"));
        assert_eq!(facet.create_time(), Some(created));
        assert_eq!(facet.properties()["level"], "3");
        assert!(facet.is_facet_of(&root));
        assert!(!root.is_facet_of(&facet));
    }

    #[test]
    fn test_facet_of_other_entity() {
        let root = LineageEntity::from_entity(&EntityDetail::new("e2")).unwrap();
        let facet =
            LineageEntity::from_classification("e1", &Classification::new("SubjectArea")).unwrap();
        assert!(!facet.is_facet_of(&root));
    }

    #[test]
    fn test_type_name_differs_from_name() {
        let classification = Classification::new("Sensitivity")
            .with_type(Some(InstanceType::new("Confidentiality")));
        let facet = LineageEntity::from_classification("e1", &classification).unwrap();

        assert_eq!(facet.type_def_name(), "Confidentiality");
        assert_eq!(
            facet.kind(),
            &VertexKind::ClassificationFacet {
                classification_name: "Sensitivity".to_string()
            }
        );
    }

    #[test]
    fn test_missing_type_definition() {
        let classification = Classification::new("Confidentiality").with_type(None);
        let err = LineageEntity::from_classification("e1", &classification).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingTypeDefinition { ref classification } if classification == "Confidentiality"
        ));
    }

    #[test]
    fn test_unsupported_property_fails_vertex() {
        let classification =
            Classification::new("Confidentiality").with_property("blob", PropertyValue::Unknown);
        let err = LineageEntity::from_classification("e1", &classification).unwrap_err();
        assert!(matches!(err, Error::UnsupportedPropertyKind { .. }));
    }
}
