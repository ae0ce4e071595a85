//! Dependencies configuration

use serde::{Deserialize, Serialize};

/// How the operator's resources are written to `dependencies.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependenciesConfig {
    /// Keep the operator's original CRD instead of the rewritten Promise API
    pub preserve_operator_crd: bool,
}
