//! Twin model normalization and resource derivation for twinc.
//!
//! This crate ties interface parsing together into the `Compiler` — the
//! central API that turns one DTDL interface document into a linked pair of
//! deployable manifests: a `TwinInterface` component (the structural
//! contract) and a `TwinInstance` (a runnable unit with a container spec).
//! It also provides RFC 1123 host-name sanitization for manifest names.

pub mod compiler;
pub mod component;
pub mod hostname;
pub mod instance;
pub mod manifest;

pub use compiler::{CompileOutput, CompileWarning, Compiler};
pub use component::normalize_interface;
pub use hostname::{is_rfc1123_host_name, sanitize_host_name};
pub use instance::{derive_instance, ContainerDefaults, INSTANCE_SUFFIX};
pub use manifest::{
    ContainerSpec, ObjectMeta, PullPolicy, TwinCommand, TwinComponent, TwinComponentExtends,
    TwinComponentRef, TwinComponentSpec, TwinEnumSchema, TwinEnumValue, TwinInstance,
    TwinInstanceSpec, TwinProperty, TwinRelationship, TwinSchema, TwinTelemetry, API_VERSION,
    DEFAULT_NAMESPACE, KIND_COMPONENT, KIND_INSTANCE,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("interface error: {0}")]
    Dtdl(#[from] twinc_dtdl::DtdlError),
    #[error("host name '{name}' derived from interface '{interface_id}' is not RFC 1123 compliant")]
    InvalidHostName { interface_id: String, name: String },
    #[error("manifest serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
