//! Pipeline configuration

use serde::{Deserialize, Serialize};

use crate::{PromiseGenError, PromiseGenResult};
use promise_generator::pipeline::DEFAULT_IMAGE;

/// Settings for the generated resource configure pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Image of the step translating Promise requests into operator resources
    pub image: String,
}

impl PipelineConfig {
    pub fn validate(&self) -> PromiseGenResult<()> {
        if self.image.trim().is_empty() {
            return Err(PromiseGenError::Config(
                "Pipeline image cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            image: DEFAULT_IMAGE.to_string(),
        }
    }
}
