//! Manifest record types emitted by the compiler.
//!
//! These are the serialized shapes of the two output documents. Empty fields
//! are skipped so emitted manifests stay minimal and diff-stable.

use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "dtd.digitaltwin/v0";
pub const KIND_COMPONENT: &str = "TwinInterface";
pub const KIND_INSTANCE: &str = "TwinInstance";
pub const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
}

/// The component manifest: an interface's structural contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinComponent {
    pub kind: String,
    pub api_version: String,
    pub metadata: ObjectMeta,
    pub spec: TwinComponentSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinComponentSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<TwinProperty>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<TwinRelationship>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telemetries: Vec<TwinTelemetry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<TwinCommand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<TwinComponentExtends>,
}

/// Reference to the single parent interface, when one is declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinComponentExtends {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "TwinSchema::is_empty")]
    pub schema: TwinSchema,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub writeable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinRelationship {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub writeable: bool,
    #[serde(default)]
    pub min_multiplicity: i64,
    #[serde(default)]
    pub max_multiplicity: i64,
    #[serde(default, skip_serializing_if = "TwinSchema::is_empty")]
    pub schema: TwinSchema,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<TwinProperty>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinTelemetry {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "TwinSchema::is_empty")]
    pub schema: TwinSchema,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinCommand {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinSchema {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub primitive_type: String,
    #[serde(default, skip_serializing_if = "TwinEnumSchema::is_empty")]
    pub enum_type: TwinEnumSchema,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinEnumSchema {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_schema: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<TwinEnumValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinEnumValue {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub enum_value: String,
}

impl TwinSchema {
    pub fn is_empty(&self) -> bool {
        self.primitive_type.is_empty() && self.enum_type.is_empty()
    }
}

impl TwinEnumSchema {
    pub fn is_empty(&self) -> bool {
        self.value_schema.is_empty() && self.enum_values.is_empty()
    }
}

/// The instance manifest: a runnable unit referencing its component by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinInstance {
    pub kind: String,
    pub api_version: String,
    pub metadata: ObjectMeta,
    pub spec: TwinInstanceSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinInstanceSpec {
    pub id: String,
    pub component_ref: TwinComponentRef,
    pub container_spec: ContainerSpec,
}

/// Read-only link from an instance to its component; the instance never
/// embeds the component itself, since the two manifests are independently
/// addressable documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinComponentRef {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSpec {
    pub name: String,
    pub image: String,
    pub pull_policy: PullPolicy,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PullPolicy {
    #[default]
    IfNotPresent,
    Always,
    Never,
}
