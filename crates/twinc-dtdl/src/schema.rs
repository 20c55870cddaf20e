//! Total schema resolution: raw JSON schema values to normalized [`Schema`].
//!
//! A DTDL schema is either a bare primitive tag (`"integer"`, `"string"`,
//! `"boolean"`, `"double"`) or a nested enum descriptor. Resolution never
//! fails: anything unrecognized collapses to the all-empty schema.

use crate::types::PrimitiveType;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Normalized schema: a nominal primitive tag plus an enum descriptor.
///
/// Exactly one form is meaningfully populated per source value. A bare
/// primitive carries an empty [`EnumSchema`]; an enum carries its declared
/// value type as the nominal primitive as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub primitive: PrimitiveType,
    pub enum_schema: EnumSchema,
}

/// Enum descriptor: the value type shared by all entries, plus the entries
/// themselves in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumSchema {
    pub value_schema: PrimitiveType,
    pub enum_values: Vec<EnumValue>,
}

/// One named enum entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub display_name: String,
    pub enum_value: String,
}

impl Schema {
    /// True if the source schema carried neither a primitive tag nor enum values.
    pub fn is_empty(&self) -> bool {
        self.primitive.is_empty() && self.enum_schema.enum_values.is_empty()
    }
}

/// Resolve a raw JSON schema value into a normalized [`Schema`].
///
/// Total function: an absent or unrecognized value yields the default
/// (all-empty) schema rather than an error. Enum entries are preserved in
/// document order, which is externally observable through manifest diffing.
pub fn resolve_schema(raw: Option<&Value>) -> Schema {
    match raw {
        Some(Value::String(tag)) => Schema {
            primitive: PrimitiveType::new(tag.as_str()),
            enum_schema: EnumSchema::default(),
        },
        Some(Value::Object(map)) => resolve_enum(map),
        _ => Schema::default(),
    }
}

fn resolve_enum(map: &Map<String, Value>) -> Schema {
    let value_schema = map
        .get("valueSchema")
        .and_then(Value::as_str)
        .map(PrimitiveType::from)
        .unwrap_or_default();

    let mut enum_values = Vec::new();
    if let Some(Value::Array(entries)) = map.get("enumValues") {
        for entry in entries {
            let Some(obj) = entry.as_object() else {
                continue;
            };
            enum_values.push(EnumValue {
                name: string_field(obj, "name"),
                display_name: string_field(obj, "displayName"),
                enum_value: scalar_field(obj, "enumValue"),
            });
        }
    }

    Schema {
        // The enum's declared value type doubles as the nominal primitive.
        primitive: value_schema.clone(),
        enum_schema: EnumSchema {
            value_schema,
            enum_values,
        },
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Enum values appear as strings or bare numbers in the wild; both are
/// carried as their string form.
fn scalar_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(resolve_schema(Some(&value)))
    }
}
