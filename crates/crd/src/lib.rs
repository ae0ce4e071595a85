//! CRD resolution and rewriting for operator-backed Promises

pub mod error;
pub mod filter;
pub mod parser;
pub mod resolver;
pub mod rewriter;
pub mod schema;
pub mod types;
pub mod version;

pub use error::{CrdError, CrdResult};
pub use filter::CrdFilter;
pub use parser::ManifestParser;
pub use resolver::resolve;
pub use rewriter::{derive_names, rewrite, rewrite_for, TargetApi};
pub use types::{CrdResource, DynamicResource, OperatorCoordinates, Resource, ResourceSet};
pub use version::select_storage_version;

pub use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionNames, CustomResourceDefinitionVersion,
};
