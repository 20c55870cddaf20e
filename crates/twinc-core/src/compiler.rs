//! The compiler facade: parse → normalize → sanitize → derive → emit.

use crate::component::normalize_interface;
use crate::hostname::{is_rfc1123_host_name, sanitize_host_name};
use crate::instance::{derive_instance, ContainerDefaults};
use crate::manifest::{
    ObjectMeta, TwinComponent, TwinInstance, API_VERSION, DEFAULT_NAMESPACE, KIND_COMPONENT,
    KIND_INSTANCE,
};
use crate::CoreError;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};
use twinc_dtdl::{parse_interface_str, Interface};

/// Non-fatal diagnostic attached to a compile result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompileWarning {
    /// The sanitized metadata name still fails the RFC 1123 grammar.
    #[serde(rename_all = "camelCase")]
    HostName { interface_id: String, name: String },
}

impl fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostName { interface_id, name } => write!(
                f,
                "host name '{name}' derived from interface '{interface_id}' is not RFC 1123 compliant"
            ),
        }
    }
}

/// Both manifests compiled from one interface document, plus any warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOutput {
    pub component: TwinComponent,
    pub instance: TwinInstance,
    pub warnings: Vec<CompileWarning>,
}

impl CompileOutput {
    /// Serialize both manifests into one YAML stream, component first,
    /// separated by a document marker.
    pub fn to_yaml(&self) -> Result<String, CoreError> {
        let component = serde_yaml::to_string(&self.component)?;
        let instance = serde_yaml::to_string(&self.instance)?;
        Ok(format!("{component}---\n{instance}"))
    }
}

/// Compiles DTDL interface documents into linked twin resource manifests.
///
/// Stateless and side-effect-free: every compile call is an independent,
/// idempotent transform, so concurrent use needs no locking.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    defaults: ContainerDefaults,
    strict_host_names: bool,
}

impl Compiler {
    pub fn new(defaults: ContainerDefaults) -> Self {
        Self {
            defaults,
            strict_host_names: false,
        }
    }

    /// Turn host-name warnings into hard errors.
    #[must_use]
    pub fn with_strict_host_names(mut self, strict: bool) -> Self {
        self.strict_host_names = strict;
        self
    }

    pub fn compile_str(&self, input: &str) -> Result<CompileOutput, CoreError> {
        let interface = parse_interface_str(input)?;
        self.compile_interface(&interface)
    }

    pub fn compile_file(&self, path: impl AsRef<Path>) -> Result<CompileOutput, CoreError> {
        let input = std::fs::read_to_string(path)?;
        self.compile_str(&input)
    }

    /// Compile an already-parsed interface into its two manifests.
    pub fn compile_interface(&self, interface: &Interface) -> Result<CompileOutput, CoreError> {
        let spec = normalize_interface(interface);

        let name = sanitize_host_name(&spec.id);
        let mut warnings = Vec::new();
        if !is_rfc1123_host_name(&name) {
            if self.strict_host_names {
                return Err(CoreError::InvalidHostName {
                    interface_id: spec.id,
                    name,
                });
            }
            warn!(
                interface_id = %spec.id,
                name = %name,
                "sanitized metadata name is not RFC 1123 compliant"
            );
            warnings.push(CompileWarning::HostName {
                interface_id: spec.id.clone(),
                name: name.clone(),
            });
        }

        let metadata = ObjectMeta {
            name,
            namespace: DEFAULT_NAMESPACE.to_owned(),
        };

        let instance_spec = derive_instance(&spec, &self.defaults);
        debug!(
            component = %spec.id,
            instance = %instance_spec.id,
            "derived twin resources"
        );

        Ok(CompileOutput {
            component: TwinComponent {
                kind: KIND_COMPONENT.to_owned(),
                api_version: API_VERSION.to_owned(),
                metadata: metadata.clone(),
                spec,
            },
            instance: TwinInstance {
                kind: KIND_INSTANCE.to_owned(),
                api_version: API_VERSION.to_owned(),
                metadata,
                spec: instance_spec,
            },
            warnings,
        })
    }
}
