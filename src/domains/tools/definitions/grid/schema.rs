//! WAPI introspection: object schemas and the global search.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{SearchOptions, require_non_empty};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWapiSchemaParams {
    /// Object type, e.g. "record:a". Omit to list supported object types and WAPI versions.
    pub object_type: Option<String>,
}

pub struct GetWapiSchemaTool;

impl ToolDefinition for GetWapiSchemaTool {
    const NAME: &'static str = "get_wapi_schema";
    const DESCRIPTION: &'static str = "Describe an object type's fields and searchable attributes, or list every object type the grid supports when no type is given.";
    const READ_ONLY: bool = true;
    type Params = GetWapiSchemaParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        let object_type = params.object_type.unwrap_or_default();
        if object_type.contains('/') || object_type.contains('?') {
            return Err(ToolError::invalid_arguments(format!(
                "object_type must be a bare type name such as 'record:a': {}",
                object_type
            )));
        }
        Ok(WapiRequest::schema(&object_type))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GlobalSearchParams {
    /// Text to search for across all object types (regular expression).
    pub search_string: String,

    /// Restrict results to one object type, e.g. "record:host".
    pub objtype: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct GlobalSearchTool;

impl ToolDefinition for GlobalSearchTool {
    const NAME: &'static str = "global_search";
    const DESCRIPTION: &'static str = "Search every object on the grid for a string (name, address, comment...). Useful when the object type is unknown.";
    const READ_ONLY: bool = true;
    type Params = GlobalSearchParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        require_non_empty("search_string", &params.search_string)?;
        let request = WapiRequest::get("search")
            .query("search_string~", params.search_string)
            .query_opt("objtype", params.objtype);
        params.options.apply(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{query_value, rejected, request_for};
    use serde_json::json;

    #[test]
    fn test_schema_for_type() {
        let request = request_for::<GetWapiSchemaTool>(json!({"object_type": "record:host"}));
        assert_eq!(request.path, "record:host");
        assert_eq!(query_value(&request, "_schema"), Some("1"));
    }

    #[test]
    fn test_schema_for_grid() {
        let request = request_for::<GetWapiSchemaTool>(json!({}));
        assert_eq!(request.path, "");
        assert_eq!(query_value(&request, "_schema"), Some("1"));
    }

    #[test]
    fn test_schema_rejects_reference() {
        assert!(rejected::<GetWapiSchemaTool>(json!({
            "object_type": "record:a/ZG5z:www.example.com/default"
        })));
    }

    #[test]
    fn test_global_search() {
        let request = request_for::<GlobalSearchTool>(json!({
            "search_string": "10.0.0.5",
            "objtype": "record:host"
        }));
        assert_eq!(request.path, "search");
        assert_eq!(query_value(&request, "search_string~"), Some("10.0.0.5"));
        assert_eq!(query_value(&request, "objtype"), Some("record:host"));
    }

    #[test]
    fn test_global_search_requires_text() {
        assert!(rejected::<GlobalSearchTool>(json!({"search_string": "  "})));
    }
}
