//! Manifest loading from a directory of YAML/JSON documents

use crate::error::{CrdError, CrdResult};
use crate::types::{Resource, ResourceSet};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const MANIFEST_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

pub struct ManifestParser;

impl Default for ManifestParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser {
    pub fn new() -> Self {
        Self
    }

    /// Load every manifest below `dir_path` into a resource set.
    ///
    /// Files are visited in file-name order so the resulting set is stable
    /// across runs.
    pub fn parse_from_directory(&self, dir_path: &Path) -> CrdResult<ResourceSet> {
        info!("Loading manifests from directory: {:?}", dir_path);

        if !dir_path.is_dir() {
            return Err(CrdError::Io {
                path: dir_path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "manifest directory does not exist or is not a directory",
                ),
            });
        }

        let mut resources = ResourceSet::new();

        for entry in WalkDir::new(dir_path).sort_by_file_name() {
            let entry = entry.map_err(|e| CrdError::Io {
                path: e.path().unwrap_or(dir_path).to_path_buf(),
                source: e.into(),
            })?;

            if !entry.file_type().is_file() || !Self::is_manifest(entry.path()) {
                continue;
            }

            for resource in self.parse_manifest_file(entry.path())? {
                resources.push(resource);
            }
        }

        info!("Loaded {} resources", resources.len());
        Ok(resources)
    }

    /// Parse all documents in a single manifest file
    pub fn parse_manifest_file(&self, path: &Path) -> CrdResult<Vec<Resource>> {
        let content = std::fs::read_to_string(path).map_err(|source| CrdError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let resources = self.parse_documents(&content).map_err(|e| match e {
            CrdError::Serialization(source) => CrdError::Manifest {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        debug!("Parsed {} resources from {}", resources.len(), path.display());
        Ok(resources)
    }

    /// Parse a multi-document YAML (or JSON) string into resources
    pub fn parse_documents(&self, content: &str) -> CrdResult<Vec<Resource>> {
        let mut resources = Vec::new();

        for document in serde_yaml::Deserializer::from_str(content) {
            let value = serde_yaml::Value::deserialize(document)?;
            self.collect_resources(value, &mut resources)?;
        }

        Ok(resources)
    }

    fn collect_resources(
        &self,
        value: serde_yaml::Value,
        resources: &mut Vec<Resource>,
    ) -> CrdResult<()> {
        if value.is_null() {
            return Ok(());
        }

        if let serde_yaml::Value::Sequence(items) = value {
            for item in items {
                self.collect_resources(item, resources)?;
            }
            return Ok(());
        }

        if value.get("kind").and_then(|k| k.as_str()) == Some("List") {
            if let Some(items) = value.get("items").and_then(|i| i.as_sequence()) {
                for item in items {
                    self.collect_resources(item.clone(), resources)?;
                }
            }
            return Ok(());
        }

        let kind = value.get("kind").and_then(|k| k.as_str());
        let name = value
            .get("metadata")
            .and_then(|m| m.get("name"))
            .and_then(|n| n.as_str());

        match (kind, name) {
            (Some(_), Some(_)) => resources.push(Resource::from_value(value)?),
            _ => warn!("Skipping document without kind or metadata.name"),
        }

        Ok(())
    }

    fn is_manifest(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| MANIFEST_EXTENSIONS.contains(&ext))
            .unwrap_or(false)
    }
}
