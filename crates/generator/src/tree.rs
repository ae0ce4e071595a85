//! Output file trees and writing them to disk

use crate::error::{GeneratorError, GeneratorResult};
use crate::result::WriteResult;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// A node of an output tree: a YAML file or a nested directory
#[derive(Debug, Clone, PartialEq)]
pub enum OutputNode {
    File(serde_yaml::Value),
    Directory(OutputTree),
}

/// Files and directories keyed by path relative to their parent.
///
/// Keys may span several path segments, e.g. `workflows/resource/configure`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputTree {
    entries: BTreeMap<String, OutputNode>,
}

impl OutputTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file whose content is `content` serialized as YAML
    pub fn insert_file<T: Serialize + ?Sized>(
        &mut self,
        path: impl Into<String>,
        content: &T,
    ) -> GeneratorResult<()> {
        let value = serde_yaml::to_value(content)?;
        self.entries.insert(path.into(), OutputNode::File(value));
        Ok(())
    }

    pub fn insert_dir(&mut self, path: impl Into<String>, tree: OutputTree) {
        self.entries.insert(path.into(), OutputNode::Directory(tree));
    }

    pub fn get(&self, path: &str) -> Option<&OutputNode> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &OutputNode)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Relative paths of every file in the tree
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        self.collect_paths(Path::new(""), &mut paths);
        paths
    }

    fn collect_paths(&self, prefix: &Path, paths: &mut Vec<PathBuf>) {
        for (name, node) in &self.entries {
            let path = prefix.join(name);
            match node {
                OutputNode::File(_) => paths.push(path),
                OutputNode::Directory(tree) => tree.collect_paths(&path, paths),
            }
        }
    }
}

/// Writes output trees below a base directory
pub struct TreeWriter {
    base_path: PathBuf,
}

impl TreeWriter {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Write every file of `tree`, creating directories as needed.
    ///
    /// Existing files are overwritten. Nothing written before a failure is
    /// removed.
    pub fn write(&self, tree: &OutputTree) -> GeneratorResult<WriteResult> {
        let start = Instant::now();
        info!("Writing output files to {:?}", self.base_path);

        let mut result = WriteResult {
            output_path: self.base_path.clone(),
            ..Default::default()
        };

        self.create_dir(&self.base_path, &mut result)?;
        self.write_tree(&self.base_path, tree, &mut result)?;

        result.processing_time_ms = start.elapsed().as_millis() as u64;
        info!("Wrote {} files", result.files_written());
        Ok(result)
    }

    fn write_tree(
        &self,
        dir: &Path,
        tree: &OutputTree,
        result: &mut WriteResult,
    ) -> GeneratorResult<()> {
        for (name, node) in tree.entries() {
            let path = dir.join(name);
            match node {
                OutputNode::Directory(subtree) => {
                    self.create_dir(&path, result)?;
                    self.write_tree(&path, subtree, result)?;
                }
                OutputNode::File(content) => {
                    if let Some(parent) = path.parent() {
                        self.create_dir(parent, result)?;
                    }
                    let yaml = serde_yaml::to_string(content)?;
                    std::fs::write(&path, yaml).map_err(|source| GeneratorError::Io {
                        path: path.clone(),
                        source,
                    })?;
                    debug!("Wrote {}", path.display());
                    result.files.push(path);
                }
            }
        }
        Ok(())
    }

    fn create_dir(&self, path: &Path, result: &mut WriteResult) -> GeneratorResult<()> {
        if path.is_dir() {
            return Ok(());
        }
        std::fs::create_dir_all(path).map_err(|source| GeneratorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        result.directories_created += 1;
        Ok(())
    }
}
