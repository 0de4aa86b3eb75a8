//! Metadata instance types consumed by the lineage builder
//!
//! These mirror the shape of repository instances as they arrive from a
//! metadata repository: an entity with its audit header, a typed property bag
//! and the classifications attached to it.

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type information attached to an instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_def_guid: Option<String>,

    #[serde(default)]
    pub type_def_name: String,
}

impl InstanceType {
    pub fn new(type_def_name: impl Into<String>) -> Self {
        Self {
            type_def_guid: None,
            type_def_name: type_def_name.into(),
        }
    }
}

/// A primitive property value
///
/// Big numbers keep their textual form. A primitive type this crate does not
/// know deserializes as [`PrimitiveValue::Unknown`] so the normalizer can
/// report it instead of the whole record failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPrimitive", into = "RawPrimitive")]
pub enum PrimitiveValue {
    Boolean(bool),
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    BigInteger(String),
    BigDecimal(String),
    String(String),
    Date(DateTime<Utc>),
    Unknown { type_name: String },
}

impl PrimitiveValue {
    /// Primitive type name as reported by repositories
    pub fn type_name(&self) -> &str {
        match self {
            Self::Boolean(_) => "BOOLEAN",
            Self::Byte(_) => "BYTE",
            Self::Char(_) => "CHAR",
            Self::Short(_) => "SHORT",
            Self::Int(_) => "INT",
            Self::Long(_) => "LONG",
            Self::Float(_) => "FLOAT",
            Self::Double(_) => "DOUBLE",
            Self::BigInteger(_) => "BIGINTEGER",
            Self::BigDecimal(_) => "BIGDECIMAL",
            Self::String(_) => "STRING",
            Self::Date(_) => "DATE",
            Self::Unknown { type_name } => type_name,
        }
    }
}

/// Wire shape of a primitive: `{ "type": "INT", "value": 3 }`
#[derive(Serialize, Deserialize)]
struct RawPrimitive {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    value: serde_json::Value,
}

impl TryFrom<RawPrimitive> for PrimitiveValue {
    type Error = serde_json::Error;

    fn try_from(raw: RawPrimitive) -> std::result::Result<Self, Self::Error> {
        use serde_json::from_value;

        let value = raw.value;
        Ok(match raw.type_name.as_str() {
            "BOOLEAN" => Self::Boolean(from_value(value)?),
            "BYTE" => Self::Byte(from_value(value)?),
            "CHAR" => Self::Char(from_value(value)?),
            "SHORT" => Self::Short(from_value(value)?),
            "INT" => Self::Int(from_value(value)?),
            "LONG" => Self::Long(from_value(value)?),
            "FLOAT" => Self::Float(from_value(value)?),
            "DOUBLE" => Self::Double(from_value(value)?),
            "BIGINTEGER" => Self::BigInteger(number_text(value)?),
            "BIGDECIMAL" => Self::BigDecimal(number_text(value)?),
            "STRING" => Self::String(from_value(value)?),
            "DATE" => Self::Date(from_value(value)?),
            other => Self::Unknown {
                type_name: other.to_string(),
            },
        })
    }
}

impl From<PrimitiveValue> for RawPrimitive {
    fn from(primitive: PrimitiveValue) -> Self {
        let type_name = primitive.type_name().to_string();
        let value = match primitive {
            PrimitiveValue::Boolean(v) => v.into(),
            PrimitiveValue::Byte(v) => v.into(),
            PrimitiveValue::Char(v) => v.to_string().into(),
            PrimitiveValue::Short(v) => v.into(),
            PrimitiveValue::Int(v) => v.into(),
            PrimitiveValue::Long(v) => v.into(),
            PrimitiveValue::Float(v) => v.into(),
            PrimitiveValue::Double(v) => v.into(),
            PrimitiveValue::BigInteger(v) | PrimitiveValue::BigDecimal(v) => v.into(),
            PrimitiveValue::String(v) => v.into(),
            PrimitiveValue::Date(v) => serde_json::to_value(v).unwrap_or_default(),
            PrimitiveValue::Unknown { .. } => serde_json::Value::Null,
        };
        Self { type_name, value }
    }
}

/// Big numbers arrive either as JSON numbers or as strings
fn number_text(value: serde_json::Value) -> std::result::Result<String, serde_json::Error> {
    use serde::de::Error as _;

    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde_json::Error::custom(format!(
            "expected a number or numeric string, found {}",
            other
        ))),
    }
}

/// A typed property value
///
/// The set of kinds is closed. Anything a repository reports that does not
/// fit one of the known categories deserializes as [`PropertyValue::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "category",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum PropertyValue {
    Primitive {
        value: PrimitiveValue,
    },
    Enum {
        symbolic_name: String,
        #[serde(default)]
        ordinal: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Array {
        #[serde(default)]
        values: Vec<PropertyValue>,
    },
    Map {
        #[serde(default)]
        values: BTreeMap<String, PropertyValue>,
    },
    Struct {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        type_name: Option<String>,
        #[serde(default)]
        attributes: BTreeMap<String, PropertyValue>,
    },
    #[serde(other)]
    Unknown,
}

impl PropertyValue {
    /// Category name as reported by repositories
    pub fn category(&self) -> &'static str {
        match self {
            Self::Primitive { .. } => "PRIMITIVE",
            Self::Enum { .. } => "ENUM",
            Self::Array { .. } => "ARRAY",
            Self::Map { .. } => "MAP",
            Self::Struct { .. } => "STRUCT",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Primitive {
            value: PrimitiveValue::String(value.into()),
        }
    }

    pub fn int(value: i32) -> Self {
        Self::Primitive {
            value: PrimitiveValue::Int(value),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self::Primitive {
            value: PrimitiveValue::Boolean(value),
        }
    }

    pub fn enumeration(symbolic_name: impl Into<String>, ordinal: i32) -> Self {
        Self::Enum {
            symbolic_name: symbolic_name.into(),
            ordinal,
            description: None,
        }
    }
}

impl From<PrimitiveValue> for PropertyValue {
    fn from(value: PrimitiveValue) -> Self {
        Self::Primitive { value }
    }
}

/// Typed property bag keyed by property name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceProperties(BTreeMap<String, PropertyValue>);

impl InstanceProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, PropertyValue)> for InstanceProperties {
    fn from_iter<I: IntoIterator<Item = (K, PropertyValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A classification attached to an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Classification name, matched against the lineage vocabulary
    pub name: String,

    /// Type of the classification; required to label lineage edges
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_def: Option<InstanceType>,

    #[serde(default)]
    pub version: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<InstanceProperties>,
}

impl Classification {
    /// Create a classification whose type name matches its name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            type_def: Some(InstanceType::new(name.clone())),
            name,
            version: 0,
            created_by: None,
            updated_by: None,
            create_time: None,
            update_time: None,
            properties: None,
        }
    }

    /// Type definition name, if the classification carries a usable one
    pub fn type_def_name(&self) -> Option<&str> {
        self.type_def
            .as_ref()
            .map(|t| t.type_def_name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn with_type(mut self, type_def: Option<InstanceType>) -> Self {
        self.type_def = type_def;
        self
    }

    pub fn with_version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties
            .get_or_insert_with(InstanceProperties::new)
            .insert(name, value);
        self
    }
}

/// A metadata entity with its attached classifications
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDetail {
    #[serde(default)]
    pub guid: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_def: Option<InstanceType>,

    #[serde(default)]
    pub version: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<InstanceProperties>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifications: Option<Vec<Classification>>,
}

impl EntityDetail {
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            ..Default::default()
        }
    }

    /// Parse a single entity record from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_type(mut self, type_def_name: impl Into<String>) -> Self {
        self.type_def = Some(InstanceType::new(type_def_name));
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties
            .get_or_insert_with(InstanceProperties::new)
            .insert(name, value);
        self
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classifications
            .get_or_insert_with(Vec::new)
            .push(classification);
        self
    }

    /// Attached classifications; empty when none were reported
    pub fn classifications(&self) -> &[Classification] {
        self.classifications.as_deref().unwrap_or_default()
    }
}
