//! Operator Promise requests and the files they produce

use crate::PromiseGenResult;
use promise_crd::{CustomResourceDefinition, OperatorCoordinates, ResourceSet, TargetApi};
use promise_generator::{OutputTree, Pipeline};
use std::path::PathBuf;

pub const DEPENDENCIES_FILE: &str = "dependencies.yaml";
pub const API_FILE: &str = "api.yaml";
pub const WORKFLOW_FILE: &str = "workflow.yaml";
pub const RESOURCE_CONFIGURE_DIR: &str = "workflows/resource/configure";

/// Everything needed to derive a Promise from an operator
#[derive(Debug, Clone)]
pub struct OperatorPromiseRequest {
    /// Name of the Promise being generated
    pub name: String,

    /// Directory holding the operator's installation manifests
    pub operator_manifests: PathBuf,

    /// Name of the CRD the Promise API is generated from
    pub api_from: String,

    /// Identity of the Promise API
    pub target: TargetApi,
}

/// A generated operator Promise, ready to be written out
#[derive(Debug, Clone)]
pub struct OperatorPromise {
    pub name: String,

    /// Every resource loaded from the operator manifests
    pub dependencies: ResourceSet,

    /// The rewritten CRD serving the Promise API
    pub api: CustomResourceDefinition,

    /// Where the operator's own API lives
    pub operator: OperatorCoordinates,

    pub pipelines: Vec<Pipeline>,
}

impl OperatorPromise {
    /// Lay out the Promise's files:
    ///
    /// ```text
    /// dependencies.yaml
    /// api.yaml
    /// workflows/resource/configure/workflow.yaml
    /// ```
    pub fn to_output_tree(&self) -> PromiseGenResult<OutputTree> {
        let mut workflows = OutputTree::new();
        workflows.insert_file(WORKFLOW_FILE, &self.pipelines)?;

        let mut tree = OutputTree::new();
        tree.insert_file(DEPENDENCIES_FILE, &self.dependencies)?;
        tree.insert_file(API_FILE, &self.api)?;
        tree.insert_dir(RESOURCE_CONFIGURE_DIR, workflows);

        Ok(tree)
    }

    /// API version requests against the Promise use
    pub fn api_version(&self) -> Option<String> {
        self.api
            .spec
            .versions
            .first()
            .map(|v| format!("{}/{}", self.api.spec.group, v.name))
    }
}
