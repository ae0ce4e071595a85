//! Main configuration structure and implementation

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::{DependenciesConfig, PipelineConfig};
use crate::{PromiseGenError, PromiseGenResult};
use promise_generator::OutputConfig;

pub const CONFIG_VERSION: &str = "1.0";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Output configuration
    pub output: OutputConfig,

    /// Pipeline settings
    pub pipeline: PipelineConfig,

    /// Handling of the loaded operator resources
    pub dependencies: DependenciesConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> PromiseGenResult<Self> {
        debug!("Loading configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        config.expand_paths();
        config.validate()?;
        Ok(config)
    }

    /// Expand `~` and environment variables in configured paths
    pub fn expand_paths(&mut self) {
        let base_path = self.output.base_path.to_string_lossy().into_owned();
        self.output.base_path = crate::utils::expand_path(&base_path);
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> PromiseGenResult<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> PromiseGenResult<()> {
        if self.version != CONFIG_VERSION {
            return Err(PromiseGenError::Config(format!(
                "Unsupported configuration version: {}",
                self.version
            )));
        }

        self.output
            .validate()
            .map_err(|e| PromiseGenError::Config(e.to_string()))?;
        self.pipeline.validate()?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            output: OutputConfig::default(),
            pipeline: PipelineConfig::default(),
            dependencies: DependenciesConfig::default(),
        }
    }
}
