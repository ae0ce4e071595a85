//! Loaded manifest resources and the set that holds them

use crate::error::{CrdError, CrdResult};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use serde::{Serialize, Serializer};

/// Kind of a CustomResourceDefinition document
pub const CRD_KIND: &str = "CustomResourceDefinition";

/// The only CRD apiVersion decoded into the typed variant
pub const CRD_API_VERSION: &str = "apiextensions.k8s.io/v1";

/// A single loaded manifest document.
///
/// Documents are matched on their `kind` when loaded. CRDs served from
/// `apiextensions.k8s.io/v1` also get a typed view, everything else keeps its
/// original structure untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    CustomResourceDefinition(CrdResource),
    Other(DynamicResource),
}

impl Resource {
    /// Build a resource from a parsed document, decoding it when the kind is known
    pub fn from_value(value: serde_yaml::Value) -> CrdResult<Self> {
        let dynamic = DynamicResource::new(value);

        if dynamic.kind() == Some(CRD_KIND) && dynamic.api_version() == Some(CRD_API_VERSION) {
            return Ok(Resource::CustomResourceDefinition(CrdResource::decode(
                dynamic,
            )?));
        }

        Ok(Resource::Other(dynamic))
    }

    pub fn kind(&self) -> &str {
        match self {
            Resource::CustomResourceDefinition(_) => CRD_KIND,
            Resource::Other(dynamic) => dynamic.kind().unwrap_or_default(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Resource::CustomResourceDefinition(crd) => {
                crd.crd().metadata.name.as_deref().unwrap_or_default()
            }
            Resource::Other(dynamic) => dynamic.name().unwrap_or_default(),
        }
    }

    pub fn api_version(&self) -> &str {
        match self {
            Resource::CustomResourceDefinition(_) => CRD_API_VERSION,
            Resource::Other(dynamic) => dynamic.api_version().unwrap_or_default(),
        }
    }

    /// Typed view of the resource when it is a decoded CRD
    pub fn as_crd(&self) -> Option<&CustomResourceDefinition> {
        match self {
            Resource::CustomResourceDefinition(crd) => Some(crd.crd()),
            Resource::Other(_) => None,
        }
    }
}

impl From<CustomResourceDefinition> for Resource {
    fn from(crd: CustomResourceDefinition) -> Self {
        Resource::CustomResourceDefinition(CrdResource::new(crd))
    }
}

/// A CRD with its typed view.
///
/// CRDs read from a manifest keep the document they were decoded from and are
/// serialized from it, so fields the typed view does not model survive.
#[derive(Debug, Clone, PartialEq)]
pub struct CrdResource {
    crd: Box<CustomResourceDefinition>,
    source: Option<DynamicResource>,
}

impl CrdResource {
    /// A CRD built in memory, serialized from its typed form
    pub fn new(crd: CustomResourceDefinition) -> Self {
        Self {
            crd: Box::new(crd),
            source: None,
        }
    }

    /// Decode a loaded document, keeping the document itself for output
    pub fn decode(source: DynamicResource) -> CrdResult<Self> {
        let crd: CustomResourceDefinition = serde_yaml::from_value(source.0.clone())?;
        Ok(Self {
            crd: Box::new(crd),
            source: Some(source),
        })
    }

    pub fn crd(&self) -> &CustomResourceDefinition {
        &self.crd
    }
}

impl Serialize for CrdResource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.source {
            Some(source) => source.serialize(serializer),
            None => self.crd.serialize(serializer),
        }
    }
}

/// Manifest document of a kind this tool does not interpret
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DynamicResource(serde_yaml::Value);

impl DynamicResource {
    pub fn new(value: serde_yaml::Value) -> Self {
        Self(value)
    }

    pub fn kind(&self) -> Option<&str> {
        self.0.get("kind").and_then(|k| k.as_str())
    }

    pub fn api_version(&self) -> Option<&str> {
        self.0.get("apiVersion").and_then(|v| v.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.0
            .get("metadata")
            .and_then(|m| m.get("name"))
            .and_then(|n| n.as_str())
    }
}

/// Ordered snapshot of every resource loaded from a manifest directory
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResourceSet {
    resources: Vec<Resource>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.resources.iter()
    }

    pub fn as_slice(&self) -> &[Resource] {
        &self.resources
    }

    /// Iterate over every decoded CRD in load order
    pub fn crds(&self) -> impl Iterator<Item = &CustomResourceDefinition> {
        self.resources.iter().filter_map(Resource::as_crd)
    }

    /// Position of the first CRD carrying the given name
    pub fn position_of_crd(&self, name: &str) -> Option<usize> {
        self.resources
            .iter()
            .position(|r| r.kind() == CRD_KIND && r.name() == name)
    }

    /// Put a rewritten CRD back in place of the first CRD named `name`.
    ///
    /// Returns the resource that was replaced.
    pub fn replace_crd(&mut self, name: &str, crd: CustomResourceDefinition) -> CrdResult<Resource> {
        let idx = self
            .position_of_crd(name)
            .ok_or_else(|| CrdError::NotFound(name.to_string()))?;
        Ok(std::mem::replace(&mut self.resources[idx], crd.into()))
    }
}

impl From<Vec<Resource>> for ResourceSet {
    fn from(resources: Vec<Resource>) -> Self {
        Self { resources }
    }
}

impl FromIterator<Resource> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = Resource>>(iter: I) -> Self {
        Self {
            resources: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResourceSet {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

/// Group, version and kind of the operator's original API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorCoordinates {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl OperatorCoordinates {
    /// Capture the coordinates of `crd` at the given version, before any rewrite
    pub fn of(crd: &CustomResourceDefinition, version_idx: usize) -> CrdResult<Self> {
        let version = crd.spec.versions.get(version_idx).ok_or_else(|| {
            CrdError::invalid(
                crd.metadata.name.clone().unwrap_or_default(),
                format!("no version at index {version_idx}"),
            )
        })?;

        Ok(Self {
            group: crd.spec.group.clone(),
            version: version.name.clone(),
            kind: crd.spec.names.kind.clone(),
        })
    }

    pub fn api_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }
}
