//! Configuration types for the generator

use crate::error::{GeneratorError, GeneratorResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the Promise files are written into
    pub base_path: PathBuf,
}

impl OutputConfig {
    pub fn validate(&self) -> GeneratorResult<()> {
        if self.base_path.as_os_str().is_empty() {
            return Err(GeneratorError::Config(
                "Base path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
        }
    }
}
