//! Promise Generator Library
//!
//! Derives a Kratix Promise from the installation manifests of an existing
//! Kubernetes Operator: one of the operator's CRDs becomes the Promise API, and
//! a resource configure pipeline translates Promise requests back into the
//! operator's own resources.

pub mod cli;
pub mod config;
pub mod promise;
pub mod utils;

pub use config::{Config, DependenciesConfig, PipelineConfig};
pub use promise::{OperatorPromise, OperatorPromiseRequest};
pub use promise_crd::{
    CrdError, CustomResourceDefinition, ManifestParser, OperatorCoordinates, Resource,
    ResourceSet, TargetApi,
};
pub use promise_generator::{
    GeneratorError, OutputConfig, OutputTree, Pipeline, PipelineBuilder, WriteResult,
};

use promise_generator::TreeWriter;
use std::path::Path;
use tracing::{debug, info};

/// Main application context that coordinates loading, rewriting and writing
pub struct PromiseGen {
    config: Config,
    parser: ManifestParser,
    pipelines: PipelineBuilder,
}

impl PromiseGen {
    /// Create a new PromiseGen instance with the given configuration
    pub fn new(config: Config) -> PromiseGenResult<Self> {
        config.validate()?;

        let pipelines = PipelineBuilder::new().with_image(config.pipeline.image.clone());

        Ok(Self {
            config,
            parser: ManifestParser::new(),
            pipelines,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load every resource found in an operator's manifest directory
    pub fn load_manifests(&self, dir: &Path) -> PromiseGenResult<ResourceSet> {
        Ok(self.parser.parse_from_directory(dir)?)
    }

    /// Build an operator Promise from the manifests named in `request`
    pub fn operator_promise(
        &self,
        request: &OperatorPromiseRequest,
    ) -> PromiseGenResult<OperatorPromise> {
        info!(
            "Generating Promise {} from {:?}",
            request.name, request.operator_manifests
        );

        let dependencies = self.load_manifests(&request.operator_manifests)?;
        self.operator_promise_from(dependencies, request)
    }

    /// Build an operator Promise from an already loaded resource set
    pub fn operator_promise_from(
        &self,
        mut dependencies: ResourceSet,
        request: &OperatorPromiseRequest,
    ) -> PromiseGenResult<OperatorPromise> {
        let mut api = promise_crd::resolve(&request.api_from, dependencies.as_slice())?;
        let stored_idx = promise_crd::select_storage_version(&api)?;
        let operator = OperatorCoordinates::of(&api, stored_idx)?;

        info!(
            "Using {} version {} of kind {} as the Promise API",
            operator.group, operator.version, operator.kind
        );

        promise_crd::rewrite_for(&mut api, stored_idx, &request.target)?;

        if self.config.dependencies.preserve_operator_crd {
            debug!("Keeping operator CRD {} in dependencies", request.api_from);
        } else {
            dependencies.replace_crd(&request.api_from, api.clone())?;
        }

        let pipeline =
            self.pipelines
                .resource_configure(&operator.group, &operator.version, &operator.kind);

        Ok(OperatorPromise {
            name: request.name.clone(),
            dependencies,
            api,
            operator,
            pipelines: vec![pipeline],
        })
    }

    /// Write a Promise's files below the configured output path
    pub fn write(&self, promise: &OperatorPromise) -> PromiseGenResult<WriteResult> {
        let tree = promise.to_output_tree()?;
        let writer = TreeWriter::new(&self.config.output.base_path);
        Ok(writer.write(&tree)?)
    }
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum PromiseGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Crd(#[from] CrdError),

    #[error(transparent)]
    Generation(#[from] GeneratorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

/// Result type for the main application
pub type PromiseGenResult<T> = Result<T, PromiseGenError>;
