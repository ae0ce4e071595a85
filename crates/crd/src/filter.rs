//! Glob filters over CRD API versions

use glob::Pattern;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use tracing::warn;

/// Matches CRDs whose `group/version` fits any of a set of glob patterns
#[derive(Debug, Clone, Default)]
pub struct CrdFilter {
    patterns: Vec<Pattern>,
}

impl CrdFilter {
    /// Build a filter, dropping patterns that are not valid globs
    pub fn new<S: AsRef<str>>(filters: &[S]) -> Self {
        let patterns = filters
            .iter()
            .filter_map(|filter| match Pattern::new(filter.as_ref()) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("Ignoring invalid filter {}: {}", filter.as_ref(), e);
                    None
                }
            })
            .collect();

        Self { patterns }
    }

    /// An empty filter accepts every CRD
    pub fn matches(&self, crd: &CustomResourceDefinition) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        crd.spec.versions.iter().any(|version| {
            let api_version = format!("{}/{}", crd.spec.group, version.name);
            self.matches_api_version(&api_version)
        })
    }

    pub fn matches_api_version(&self, api_version: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(api_version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinitionVersion;

    fn crd() -> CustomResourceDefinition {
        let mut crd = CustomResourceDefinition::default();
        crd.spec.group = "test.example.com".to_string();
        crd.spec.versions = ["v1alpha1", "v1"]
            .iter()
            .map(|name| CustomResourceDefinitionVersion {
                name: name.to_string(),
                ..Default::default()
            })
            .collect();
        crd
    }

    #[test]
    fn test_filter_matching() {
        // Exact match
        assert!(CrdFilter::new(&["test.example.com/v1"]).matches(&crd()));

        // Wildcard match
        assert!(CrdFilter::new(&["test.example.com/*"]).matches(&crd()));
        assert!(CrdFilter::new(&["*.example.com/v1alpha*"]).matches(&crd()));

        // No match
        assert!(!CrdFilter::new(&["other.example.com/v1"]).matches(&crd()));
    }

    #[test]
    fn test_empty_filters() {
        let filters: [&str; 0] = [];
        assert!(CrdFilter::new(&filters).matches(&crd()));
    }

    #[test]
    fn test_invalid_patterns_are_dropped() {
        let filter = CrdFilter::new(&["[", "test.example.com/v1"]);
        assert!(filter.matches(&crd()));
        assert!(!filter.matches_api_version("other.io/v1"));
    }
}
