//! Error types for output generation

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GeneratorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
