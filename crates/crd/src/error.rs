//! Error types for CRD resolution and rewriting

use std::path::PathBuf;

/// Errors raised while loading manifests or deriving a Promise API from a CRD
#[derive(thiserror::Error, Debug)]
pub enum CrdError {
    #[error("no CRD found matching name: {0}")]
    NotFound(String),

    #[error("invalid CRD {name}: {reason}")]
    InvalidCrd { name: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("failed to parse manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CrdError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CrdError::InvalidCrd {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for CRD operations
pub type CrdResult<T> = Result<T, CrdError>;
