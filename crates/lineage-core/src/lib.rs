//! Lineage Core - Classification lineage for metadata entities
//!
//! Projects an entity and its lineage-qualified classifications into a
//! one-hop graph fragment: one vertex for the entity, one facet vertex per
//! qualifying classification, and an edge to each facet grouped by the
//! classification's type name.

pub mod context;
pub mod error;
pub mod handler;
pub mod instance;
pub mod properties;
pub mod validation;
pub mod vertex;
pub mod vocabulary;

pub use context::{AssetContext, GraphContext, Neighbors};
pub use error::{Error, Result};
pub use handler::ClassificationHandler;
pub use instance::{
    Classification, EntityDetail, InstanceProperties, InstanceType, PrimitiveValue, PropertyValue,
};
pub use validation::{IdentifierValidator, InvalidParameterHandler};
pub use vertex::{LineageEntity, VertexKind};
pub use vocabulary::{QualifiedClassifications, DEFAULT_QUALIFIED_CLASSIFICATIONS};
