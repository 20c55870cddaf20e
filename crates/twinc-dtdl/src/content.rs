//! Discriminator-based content parsing.
//!
//! Every entry in an interface's `contents` array carries an `@type` tag
//! selecting one of the DTDL content kinds. Parsing dispatches on the tag
//! literal and decodes into exactly one explicit variant; there is no
//! zero-value probing to figure out after the fact which kind was populated.

use crate::schema::Schema;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Discriminator field name in raw content objects.
pub const TYPE_FIELD: &str = "@type";

#[derive(Debug, Error)]
pub enum ContentError {
    /// `@type` is missing, not a string, or not a recognized literal.
    #[error("content @type is missing, not a string, or not recognized")]
    InvalidType,
    /// `@type` is recognized but that content kind is not implemented.
    #[error("content @type '{0}' is not supported")]
    NotSupported(String),
    /// The object's shape does not match the variant selected by its tag.
    #[error("failed to decode {kind} content: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// One parsed entry of an interface's `contents` array.
///
/// The tag is the enum discriminant itself; exactly one payload exists per
/// value. `Telemetry` and `Command` are modeled so normalization can carry
/// them, but [`parse_content`] rejects them as unsupported today.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Property(Property),
    Relationship(Relationship),
    Telemetry(Telemetry),
    Command(Command),
}

impl Content {
    /// The `@type` literal this variant was parsed from.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Property(_) => "Property",
            Self::Relationship(_) => "Relationship",
            Self::Telemetry(_) => "Telemetry",
            Self::Command(_) => "Command",
        }
    }
}

/// A named, typed value exposed by a twin.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(default, alias = "@id")]
    pub id: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub schema: Schema,
    #[serde(default)]
    pub writeable: bool,
}

/// A directed, typed link from this twin to a target interface, optionally
/// carrying its own nested properties.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(default, alias = "@id")]
    pub id: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub writeable: bool,
    #[serde(default)]
    pub min_multiplicity: i64,
    #[serde(default)]
    pub max_multiplicity: i64,
    #[serde(default)]
    pub schema: Schema,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub target: String,
}

/// A stream of emitted values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Telemetry {
    #[serde(default, alias = "@id")]
    pub id: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub schema: Schema,
}

/// An invokable operation. Request/response payload schemas are not
/// supported in this version and are rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    #[serde(default, alias = "@id")]
    pub id: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub name: String,
}

/// Parse one raw content object by its `@type` discriminator.
///
/// Nested schemas are resolved during decoding, including the schemas of a
/// relationship's nested properties. `Command`, `Telemetry`, and `Component`
/// entries are recognized but unsupported, which is distinct from an
/// unrecognized or missing tag.
pub fn parse_content(raw: &Value) -> Result<Content, ContentError> {
    let Some(tag_value) = raw.get(TYPE_FIELD) else {
        return Err(ContentError::InvalidType);
    };
    let Some(tag) = tag_value.as_str() else {
        return Err(ContentError::InvalidType);
    };

    match tag {
        "Property" => decode::<Property>(raw, "Property").map(Content::Property),
        "Relationship" => decode::<Relationship>(raw, "Relationship").map(Content::Relationship),
        "Command" | "Telemetry" | "Component" => Err(ContentError::NotSupported(tag.to_owned())),
        _ => Err(ContentError::InvalidType),
    }
}

fn decode<T: for<'de> Deserialize<'de>>(
    raw: &Value,
    kind: &'static str,
) -> Result<T, ContentError> {
    serde_json::from_value(raw.clone()).map_err(|source| ContentError::Decode { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::resolve_schema;
    use serde_json::json;

    #[test]
    fn property_parses_and_schema_matches_resolver() {
        let raw = json!({
            "@type": "Property",
            "@id": "dtmi:example:thermostat:temperature;1",
            "name": "temperature",
            "displayName": "Temperature",
            "schema": "double",
            "writeable": true
        });
        let content = parse_content(&raw).unwrap();
        let Content::Property(property) = content else {
            panic!("expected a property");
        };
        assert_eq!(property.id, "dtmi:example:thermostat:temperature;1");
        assert_eq!(property.name, "temperature");
        assert!(property.writeable);
        assert_eq!(property.schema, resolve_schema(Some(&json!("double"))));
    }

    #[test]
    fn relationship_resolves_nested_property_schemas() {
        let raw = json!({
            "@type": "Relationship",
            "name": "contains",
            "target": "dtmi:example:room;1",
            "minMultiplicity": 0,
            "maxMultiplicity": 5,
            "schema": "string",
            "properties": [
                { "name": "since", "schema": "string" },
                { "name": "priority", "schema": "integer" }
            ]
        });
        let Content::Relationship(rel) = parse_content(&raw).unwrap() else {
            panic!("expected a relationship");
        };
        assert_eq!(rel.target, "dtmi:example:room;1");
        assert_eq!(rel.max_multiplicity, 5);
        assert_eq!(rel.properties.len(), 2);
        assert_eq!(rel.properties[0].name, "since");
        assert_eq!(
            rel.properties[1].schema,
            resolve_schema(Some(&json!("integer")))
        );
    }

    #[test]
    fn recognized_but_unsupported_kinds_fail_with_not_supported() {
        for kind in ["Command", "Telemetry", "Component"] {
            let raw = json!({ "@type": kind, "name": "x" });
            match parse_content(&raw) {
                Err(ContentError::NotSupported(tag)) => assert_eq!(tag, kind),
                other => panic!("{kind}: expected NotSupported, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_tag_is_invalid_type() {
        let raw = json!({ "name": "temperature", "schema": "double" });
        assert!(matches!(
            parse_content(&raw),
            Err(ContentError::InvalidType)
        ));
    }

    #[test]
    fn non_string_tag_is_invalid_type() {
        let raw = json!({ "@type": 42, "name": "temperature" });
        assert!(matches!(
            parse_content(&raw),
            Err(ContentError::InvalidType)
        ));
    }

    #[test]
    fn unrecognized_tag_is_invalid_type() {
        let raw = json!({ "@type": "Gadget", "name": "x" });
        assert!(matches!(
            parse_content(&raw),
            Err(ContentError::InvalidType)
        ));
    }

    #[test]
    fn shape_mismatch_is_a_decode_error() {
        // `writeable` must be a bool, not an object.
        let raw = json!({
            "@type": "Property",
            "name": "temperature",
            "writeable": { "nested": true }
        });
        match parse_content(&raw) {
            Err(ContentError::Decode { kind, .. }) => assert_eq!(kind, "Property"),
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn kind_reports_the_tag_literal() {
        let raw = json!({ "@type": "Property", "name": "t" });
        assert_eq!(parse_content(&raw).unwrap().kind(), "Property");
    }
}
