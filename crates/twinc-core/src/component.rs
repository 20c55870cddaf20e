//! Interface normalization: fold parsed contents into a component spec.

use crate::manifest::{
    TwinCommand, TwinComponentExtends, TwinComponentSpec, TwinEnumSchema, TwinEnumValue,
    TwinProperty, TwinRelationship, TwinSchema, TwinTelemetry,
};
use tracing::debug;
use twinc_dtdl::{Command, Content, Interface, Property, Relationship, Schema, Telemetry};

/// Fold an interface's parsed contents into a normalized component spec.
///
/// Contents are partitioned by kind in a single pass; within each kind the
/// input order is preserved exactly, so normalizing the same interface twice
/// yields identical output. Only the first `extends` entry is honored
/// (single-parent inheritance).
pub fn normalize_interface(interface: &Interface) -> TwinComponentSpec {
    let mut properties = Vec::new();
    let mut relationships = Vec::new();
    let mut telemetries = Vec::new();
    let mut commands = Vec::new();

    for content in &interface.contents {
        match content {
            Content::Property(property) => properties.push(map_property(property)),
            Content::Relationship(relationship) => {
                relationships.push(map_relationship(relationship));
            }
            Content::Telemetry(telemetry) => telemetries.push(map_telemetry(telemetry)),
            Content::Command(command) => commands.push(map_command(command)),
        }
    }

    let extends = interface
        .extends
        .first()
        .map(|id| TwinComponentExtends { id: id.clone() });
    if interface.extends.len() > 1 {
        debug!(
            id = %interface.id,
            ignored = interface.extends.len() - 1,
            "only the first extends entry is honored"
        );
    }

    TwinComponentSpec {
        id: interface.id.clone(),
        display_name: interface.display_name.clone(),
        description: interface.description.clone(),
        comment: interface.comment.clone(),
        properties,
        relationships,
        telemetries,
        commands,
        extends,
    }
}

fn map_property(property: &Property) -> TwinProperty {
    TwinProperty {
        id: property.id.clone(),
        comment: property.comment.clone(),
        description: property.description.clone(),
        display_name: property.display_name.clone(),
        name: property.name.clone(),
        schema: map_schema(&property.schema),
        writeable: property.writeable,
    }
}

fn map_relationship(relationship: &Relationship) -> TwinRelationship {
    TwinRelationship {
        id: relationship.id.clone(),
        comment: relationship.comment.clone(),
        description: relationship.description.clone(),
        display_name: relationship.display_name.clone(),
        name: relationship.name.clone(),
        writeable: relationship.writeable,
        min_multiplicity: relationship.min_multiplicity,
        max_multiplicity: relationship.max_multiplicity,
        schema: map_schema(&relationship.schema),
        properties: relationship.properties.iter().map(map_property).collect(),
        target: relationship.target.clone(),
    }
}

fn map_telemetry(telemetry: &Telemetry) -> TwinTelemetry {
    TwinTelemetry {
        id: telemetry.id.clone(),
        comment: telemetry.comment.clone(),
        description: telemetry.description.clone(),
        display_name: telemetry.display_name.clone(),
        name: telemetry.name.clone(),
        schema: map_schema(&telemetry.schema),
    }
}

fn map_command(command: &Command) -> TwinCommand {
    TwinCommand {
        id: command.id.clone(),
        comment: command.comment.clone(),
        description: command.description.clone(),
        display_name: command.display_name.clone(),
        name: command.name.clone(),
    }
}

fn map_schema(schema: &Schema) -> TwinSchema {
    TwinSchema {
        primitive_type: schema.primitive.as_str().to_owned(),
        enum_type: TwinEnumSchema {
            value_schema: schema.enum_schema.value_schema.as_str().to_owned(),
            enum_values: schema
                .enum_schema
                .enum_values
                .iter()
                .map(|value| TwinEnumValue {
                    name: value.name.clone(),
                    display_name: value.display_name.clone(),
                    enum_value: value.enum_value.clone(),
                })
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twinc_dtdl::parse_interface_str;

    fn thermostat() -> Interface {
        parse_interface_str(
            r#"{
                "@id": "dtmi:example:Thermostat;1",
                "displayName": "Thermostat",
                "description": "Controls room temperature",
                "comment": "demo twin",
                "extends": ["base.thermostat", "base.device"],
                "contents": [
                    { "@type": "Property", "name": "setPoint", "schema": "double", "writeable": true },
                    {
                        "@type": "Property",
                        "name": "mode",
                        "schema": {
                            "@type": "Enum",
                            "valueSchema": "integer",
                            "enumValues": [
                                { "name": "on", "displayName": "On", "enumValue": "1" },
                                { "name": "off", "displayName": "Off", "enumValue": "0" }
                            ]
                        }
                    },
                    { "@type": "Relationship", "name": "controls", "target": "dtmi:example:Room;1" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn partitions_contents_by_kind_in_order() {
        let spec = normalize_interface(&thermostat());
        assert_eq!(spec.properties.len(), 2);
        assert_eq!(spec.properties[0].name, "setPoint");
        assert_eq!(spec.properties[1].name, "mode");
        assert_eq!(spec.relationships.len(), 1);
        assert_eq!(spec.relationships[0].target, "dtmi:example:Room;1");
        assert!(spec.telemetries.is_empty());
        assert!(spec.commands.is_empty());
    }

    #[test]
    fn only_first_extends_entry_is_honored() {
        let spec = normalize_interface(&thermostat());
        assert_eq!(spec.extends.as_ref().unwrap().id, "base.thermostat");
    }

    #[test]
    fn no_extends_means_no_parent_ref() {
        let interface = parse_interface_str(r#"{ "@id": "dtmi:example:Orphan;1" }"#).unwrap();
        assert!(normalize_interface(&interface).extends.is_none());
    }

    #[test]
    fn enum_schema_order_survives_normalization() {
        let spec = normalize_interface(&thermostat());
        let values = &spec.properties[1].schema.enum_type.enum_values;
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].name, "on");
        assert_eq!(values[0].enum_value, "1");
        assert_eq!(values[1].name, "off");
        assert_eq!(values[1].enum_value, "0");
        assert_eq!(spec.properties[1].schema.primitive_type, "integer");
    }

    #[test]
    fn normalization_is_idempotent() {
        let interface = thermostat();
        let first = normalize_interface(&interface);
        let second = normalize_interface(&interface);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn property_order_is_preserved_exactly() {
        let interface = parse_interface_str(
            r#"{
                "@id": "order",
                "contents": [
                    { "@type": "Property", "name": "p1", "schema": "string" },
                    { "@type": "Property", "name": "p2", "schema": "string" },
                    { "@type": "Property", "name": "p3", "schema": "string" },
                    { "@type": "Property", "name": "p4", "schema": "string" }
                ]
            }"#,
        )
        .unwrap();
        let spec = normalize_interface(&interface);
        let names: Vec<_> = spec.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["p1", "p2", "p3", "p4"]);
    }
}
