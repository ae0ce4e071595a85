//! Storage version selection

use crate::error::{CrdError, CrdResult};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;

/// Index of the version a CRD stores its objects in.
///
/// Picks the first version flagged `storage`. A CRD with no stored version
/// falls back to its first version; only an empty version list is an error.
pub fn select_storage_version(crd: &CustomResourceDefinition) -> CrdResult<usize> {
    if crd.spec.versions.is_empty() {
        return Err(CrdError::invalid(
            crd.metadata.name.clone().unwrap_or_default(),
            "no versions found in CRD",
        ));
    }

    Ok(crd
        .spec
        .versions
        .iter()
        .position(|v| v.storage)
        .unwrap_or(0))
}
