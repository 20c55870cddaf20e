//! Instance derivation: turn a normalized component into a runnable unit.

use crate::manifest::{ContainerSpec, PullPolicy, TwinComponentRef, TwinComponentSpec, TwinInstanceSpec};

/// Suffix appended to the component id to form the instance id.
pub const INSTANCE_SUFFIX: &str = "-instance";

/// Deployment-time container defaults, kept out of the transform logic so
/// they can be overridden without touching it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerDefaults {
    /// Registry namespace prefixed to container names and images.
    pub registry_prefix: String,
    /// Pinned image tag.
    pub image_tag: String,
    pub pull_policy: PullPolicy,
    /// Fixed argument vector: sink endpoint URL and port.
    pub args: Vec<String>,
}

impl Default for ContainerDefaults {
    fn default() -> Self {
        Self {
            registry_prefix: "ktwin".to_owned(),
            image_tag: "0.0.1".to_owned(),
            pull_policy: PullPolicy::IfNotPresent,
            args: vec!["http://mqtt-response-handler".to_owned(), "80".to_owned()],
        }
    }
}

/// Derive an instance spec from a fully-built component spec.
///
/// The instance holds only the component's id, not the component itself;
/// container name and image are generated deterministically from that id.
pub fn derive_instance(
    component: &TwinComponentSpec,
    defaults: &ContainerDefaults,
) -> TwinInstanceSpec {
    TwinInstanceSpec {
        id: format!("{}{INSTANCE_SUFFIX}", component.id),
        component_ref: TwinComponentRef {
            id: component.id.clone(),
        },
        container_spec: ContainerSpec {
            name: format!("{}/{}", defaults.registry_prefix, component.id),
            image: format!(
                "{}/{}:{}",
                defaults.registry_prefix, component.id, defaults.image_tag
            ),
            pull_policy: defaults.pull_policy,
            args: defaults.args.clone(),
        },
    }
}
