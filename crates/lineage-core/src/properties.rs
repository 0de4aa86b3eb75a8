//! Property normalization - typed property bags to string maps

use crate::error::{Error, Result};
use crate::instance::{InstanceProperties, PrimitiveValue, PropertyValue};
use chrono::SecondsFormat;
use std::collections::BTreeMap;

/// Convert a typed property bag into a string-keyed, string-valued map
///
/// Absent and empty bags both produce an empty map.
pub fn normalize(properties: Option<&InstanceProperties>) -> Result<BTreeMap<String, String>> {
    let Some(properties) = properties else {
        return Ok(BTreeMap::new());
    };

    properties
        .iter()
        .map(|(name, value)| -> Result<(String, String)> {
            Ok((name.clone(), render_at(name, value)?))
        })
        .collect()
}

/// Path reported for a value rendered on its own
const ROOT_PATH: &str = "<value>";

/// Render a single property value as text
pub fn render(value: &PropertyValue) -> Result<String> {
    render_at(ROOT_PATH, value)
}

fn render_at(path: &str, value: &PropertyValue) -> Result<String> {
    match value {
        PropertyValue::Primitive { value } => render_primitive(path, value),
        PropertyValue::Enum { symbolic_name, .. } => Ok(symbolic_name.clone()),
        PropertyValue::Array { values } => {
            let items = values
                .iter()
                .enumerate()
                .map(|(i, item)| render_at(&format!("{}[{}]", path, i), item))
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("[{}]", items.join(", ")))
        }
        PropertyValue::Map { values } => render_entries(path, values),
        PropertyValue::Struct { attributes, .. } => render_entries(path, attributes),
        PropertyValue::Unknown => Err(Error::UnsupportedPropertyKind {
            property: path.to_string(),
            kind: value.category().to_string(),
        }),
    }
}

fn render_entries(path: &str, entries: &BTreeMap<String, PropertyValue>) -> Result<String> {
    let items = entries
        .iter()
        .map(|(key, item)| -> Result<String> {
            let child = format!("{}.{}", path, key);
            Ok(format!("{}={}", key, render_at(&child, item)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("{{{}}}", items.join(", ")))
}

fn render_primitive(path: &str, value: &PrimitiveValue) -> Result<String> {
    Ok(match value {
        PrimitiveValue::Boolean(v) => v.to_string(),
        PrimitiveValue::Byte(v) => v.to_string(),
        PrimitiveValue::Char(v) => v.to_string(),
        PrimitiveValue::Short(v) => v.to_string(),
        PrimitiveValue::Int(v) => v.to_string(),
        PrimitiveValue::Long(v) => v.to_string(),
        PrimitiveValue::Float(v) => v.to_string(),
        PrimitiveValue::Double(v) => v.to_string(),
        PrimitiveValue::BigInteger(v) | PrimitiveValue::BigDecimal(v) => v.clone(),
        PrimitiveValue::String(v) => v.clone(),
        PrimitiveValue::Date(v) => v.to_rfc3339_opts(SecondsFormat::Millis, true),
        PrimitiveValue::Unknown { type_name } => {
            return Err(Error::UnsupportedPropertyKind {
                property: path.to_string(),
                kind: format!("PRIMITIVE {}", type_name),
            })
        }
    })
}
