//! OpenAPI schema helpers for CRD versions

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinitionVersion, JSONSchemaProps, JSON,
};
use std::collections::BTreeMap;

/// A string property that only accepts `value`
pub fn literal_enum(value: &str) -> JSONSchemaProps {
    JSONSchemaProps {
        type_: Some("string".to_string()),
        enum_: Some(vec![JSON(serde_json::Value::String(value.to_string()))]),
        ..Default::default()
    }
}

/// Top-level schema properties of a version, created empty when absent
pub fn properties_mut(
    version: &mut CustomResourceDefinitionVersion,
) -> &mut BTreeMap<String, JSONSchemaProps> {
    version
        .schema
        .get_or_insert_with(Default::default)
        .open_api_v3_schema
        .get_or_insert_with(|| JSONSchemaProps {
            type_: Some("object".to_string()),
            ..Default::default()
        })
        .properties
        .get_or_insert_with(BTreeMap::new)
}

/// Top-level schema properties of a version, if it declares any
pub fn properties(version: &CustomResourceDefinitionVersion) -> Option<&BTreeMap<String, JSONSchemaProps>> {
    version
        .schema
        .as_ref()?
        .open_api_v3_schema
        .as_ref()?
        .properties
        .as_ref()
}

/// String literals allowed by a property's `enum`
pub fn enum_values(props: &JSONSchemaProps) -> Vec<&str> {
    props
        .enum_
        .iter()
        .flatten()
        .filter_map(|JSON(value)| value.as_str())
        .collect()
}
