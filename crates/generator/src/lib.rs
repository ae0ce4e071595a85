//! Promise file generation: pipeline descriptors and output trees

pub mod config;
pub mod error;
pub mod pipeline;
pub mod result;
pub mod tree;

pub use config::OutputConfig;
pub use error::{GeneratorError, GeneratorResult};
pub use pipeline::{build_resource_configure_pipeline, Container, Pipeline, PipelineBuilder};
pub use result::WriteResult;
pub use tree::{OutputNode, OutputTree, TreeWriter};
