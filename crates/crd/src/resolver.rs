//! Target CRD lookup within a loaded resource set

use crate::error::{CrdError, CrdResult};
use crate::types::{Resource, CRD_KIND};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use tracing::debug;

/// Find the CRD called `name` and return an owned copy of it.
///
/// Resources are scanned in order and the first CRD with a matching name wins,
/// even when later resources share the name.
pub fn resolve(name: &str, resources: &[Resource]) -> CrdResult<CustomResourceDefinition> {
    let resource = resources
        .iter()
        .find(|r| r.kind() == CRD_KIND && r.name() == name)
        .ok_or_else(|| CrdError::NotFound(name.to_string()))?;

    match resource {
        Resource::CustomResourceDefinition(crd) => {
            debug!("Resolved CRD {} in group {}", name, crd.crd().spec.group);
            Ok(crd.crd().clone())
        }
        Resource::Other(other) => Err(CrdError::invalid(
            name,
            format!(
                "unsupported apiVersion {}",
                other.api_version().unwrap_or("<none>")
            ),
        )),
    }
}
