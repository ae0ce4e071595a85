//! Pipeline descriptors for Promise workflows

use k8s_openapi::api::core::v1::EnvVar;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};

pub const PIPELINE_API_VERSION: &str = "platform.kratix.io/v1alpha1";
pub const PIPELINE_KIND: &str = "Pipeline";

/// Name of the pipeline run when a resource request is configured
pub const RESOURCE_CONFIGURE_PIPELINE: &str = "instance-configure";

/// Container translating Promise API requests into operator resources
pub const FROM_API_TO_OPERATOR: &str = "from-api-to-operator";

pub const DEFAULT_IMAGE: &str = "ghcr.io/syntasso/kratix-cli/from-api-to-operator:v0.1.0";

pub const OPERATOR_GROUP_ENV: &str = "OPERATOR_GROUP";
pub const OPERATOR_VERSION_ENV: &str = "OPERATOR_VERSION";
pub const OPERATOR_KIND_ENV: &str = "OPERATOR_KIND";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: PipelineSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineSpec {
    pub containers: Vec<Container>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
}

impl Container {
    /// Value of the environment variable `name`, if set
    pub fn env_value(&self, name: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.value.as_deref())
    }
}

impl Pipeline {
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }
}

/// Builds the pipelines of an operator-backed Promise
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    image: String,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            image: DEFAULT_IMAGE.to_string(),
        }
    }

    /// Use `image` for the translation step instead of the released one
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Resource configure pipeline targeting the operator's own API.
    ///
    /// `group`, `version` and `kind` are the operator's original coordinates,
    /// not the Promise API's: the step turns each request into an operator
    /// resource.
    pub fn resource_configure(&self, group: &str, version: &str, kind: &str) -> Pipeline {
        let env = [
            (OPERATOR_GROUP_ENV, group),
            (OPERATOR_VERSION_ENV, version),
            (OPERATOR_KIND_ENV, kind),
        ]
        .into_iter()
        .map(|(name, value)| EnvVar {
            name: name.to_string(),
            value: Some(value.to_string()),
            ..Default::default()
        })
        .collect();

        Pipeline {
            api_version: PIPELINE_API_VERSION.to_string(),
            kind: PIPELINE_KIND.to_string(),
            metadata: ObjectMeta {
                name: Some(RESOURCE_CONFIGURE_PIPELINE.to_string()),
                ..Default::default()
            },
            spec: PipelineSpec {
                containers: vec![Container {
                    name: FROM_API_TO_OPERATOR.to_string(),
                    image: self.image.clone(),
                    env,
                }],
            },
        }
    }
}

/// Resource configure pipeline using the default translation image
pub fn build_resource_configure_pipeline(group: &str, version: &str, kind: &str) -> Pipeline {
    PipelineBuilder::new().resource_configure(group, version, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_configure_pipeline() {
        let pipeline = build_resource_configure_pipeline("acme.io", "v1", "Widget");

        assert_eq!(pipeline.api_version, PIPELINE_API_VERSION);
        assert_eq!(pipeline.kind, "Pipeline");
        assert_eq!(pipeline.name(), "instance-configure");
        assert_eq!(pipeline.spec.containers.len(), 1);

        let container = &pipeline.spec.containers[0];
        assert_eq!(container.name, "from-api-to-operator");
        assert_eq!(container.image, DEFAULT_IMAGE);
        assert_eq!(container.env.len(), 3);
        assert_eq!(container.env_value("OPERATOR_GROUP"), Some("acme.io"));
        assert_eq!(container.env_value("OPERATOR_VERSION"), Some("v1"));
        assert_eq!(container.env_value("OPERATOR_KIND"), Some("Widget"));
    }

    #[test]
    fn test_custom_image() {
        let pipeline = PipelineBuilder::new()
            .with_image("registry.local/from-api-to-operator:dev")
            .resource_configure("acme.io", "v1", "Widget");

        assert_eq!(
            pipeline.spec.containers[0].image,
            "registry.local/from-api-to-operator:dev"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let pipeline = build_resource_configure_pipeline("acme.io", "v1", "Widget");
        let value = serde_yaml::to_value(&pipeline).unwrap();

        assert_eq!(value["apiVersion"].as_str(), Some(PIPELINE_API_VERSION));
        assert_eq!(value["metadata"]["name"].as_str(), Some("instance-configure"));
        let env = &value["spec"]["containers"][0]["env"];
        assert_eq!(env[0]["name"].as_str(), Some("OPERATOR_GROUP"));
        assert_eq!(env[0]["value"].as_str(), Some("acme.io"));
        assert!(env[0].get("valueFrom").is_none());
    }
}
