//! Result types for write operations

use std::path::PathBuf;

/// Outcome of writing an output tree to disk
#[derive(Debug, Clone, Default)]
pub struct WriteResult {
    pub output_path: PathBuf,
    pub files: Vec<PathBuf>,
    pub directories_created: usize,
    pub processing_time_ms: u64,
}

impl WriteResult {
    pub fn files_written(&self) -> usize {
        self.files.len()
    }
}
