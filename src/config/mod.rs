//! Configuration management for PromiseGen

pub mod config;
pub mod dependencies;
pub mod pipeline;


// Re-export main types for convenience
pub use config::Config;
pub use dependencies::DependenciesConfig;
pub use pipeline::PipelineConfig;
