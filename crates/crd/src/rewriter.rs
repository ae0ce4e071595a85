//! Rewriting an operator CRD into a Promise API

use crate::error::{CrdError, CrdResult};
use crate::schema;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionNames,
};
use tracing::debug;

/// Identity the rewritten CRD is served under
#[derive(Debug, Clone, PartialEq)]
pub struct TargetApi {
    pub group: String,
    pub names: CustomResourceDefinitionNames,
    /// Version name to serve; `None` keeps the operator's storage version name
    pub version: Option<String>,
}

impl TargetApi {
    /// Target API for `kind` in `group`, with names derived from the kind
    pub fn new(group: impl Into<String>, kind: &str) -> Self {
        Self {
            group: group.into(),
            names: derive_names(kind, None),
            version: None,
        }
    }

    pub fn with_plural(mut self, plural: Option<&str>) -> Self {
        let kind = self.names.kind.clone();
        self.names = derive_names(&kind, plural);
        self
    }

    pub fn with_version(mut self, version: Option<&str>) -> Self {
        self.version = version.filter(|v| !v.is_empty()).map(str::to_string);
        self
    }

    /// `metadata.name` the rewritten CRD will carry
    pub fn crd_name(&self) -> String {
        format!("{}.{}", self.names.plural, self.group)
    }
}

/// Names for `kind`: singular is the lowercased kind, plural defaults to the
/// singular with an `s` appended
pub fn derive_names(kind: &str, plural: Option<&str>) -> CustomResourceDefinitionNames {
    let singular = kind.to_lowercase();
    let plural = match plural.filter(|p| !p.is_empty()) {
        Some(plural) => plural.to_string(),
        None => format!("{singular}s"),
    };

    CustomResourceDefinitionNames {
        plural,
        singular: Some(singular),
        kind: kind.to_string(),
        ..Default::default()
    }
}

/// Rewrite `crd` in place so it is served as `group` under `names`.
///
/// Only the version at `stored_idx` survives. It is renamed to `version` when
/// one is given, marked served and stored, and its schema gets `kind` and
/// `apiVersion` properties pinned to the new identity. The CRD is left
/// untouched when `stored_idx` does not name a version.
pub fn rewrite<'a>(
    crd: &'a mut CustomResourceDefinition,
    stored_idx: usize,
    group: &str,
    names: CustomResourceDefinitionNames,
    version: Option<&str>,
) -> CrdResult<&'a mut CustomResourceDefinition> {
    if stored_idx >= crd.spec.versions.len() {
        let reason = if crd.spec.versions.is_empty() {
            "no versions found in CRD".to_string()
        } else {
            format!("no version at index {stored_idx}")
        };
        return Err(CrdError::invalid(
            crd.metadata.name.clone().unwrap_or_default(),
            reason,
        ));
    }

    crd.metadata.name = Some(format!("{}.{}", names.plural, group));
    crd.spec.group = group.to_string();

    let mut stored = std::mem::take(&mut crd.spec.versions).swap_remove(stored_idx);

    if let Some(version) = version.filter(|v| !v.is_empty()) {
        stored.name = version.to_string();
    }
    stored.served = true;
    stored.storage = true;

    let api_version = format!("{}/{}", group, stored.name);
    let properties = schema::properties_mut(&mut stored);
    properties.insert("kind".to_string(), schema::literal_enum(&names.kind));
    properties.insert("apiVersion".to_string(), schema::literal_enum(&api_version));

    debug!(
        "Rewrote CRD to {} serving {}",
        crd.metadata.name.as_deref().unwrap_or_default(),
        api_version
    );

    crd.spec.names = names;
    crd.spec.versions = vec![stored];

    Ok(crd)
}

/// Rewrite `crd` for `target` using the version at `stored_idx`
pub fn rewrite_for<'a>(
    crd: &'a mut CustomResourceDefinition,
    stored_idx: usize,
    target: &TargetApi,
) -> CrdResult<&'a mut CustomResourceDefinition> {
    rewrite(
        crd,
        stored_idx,
        &target.group,
        target.names.clone(),
        target.version.as_deref(),
    )
}
