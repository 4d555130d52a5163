//! DNS view lookup (`view`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{SearchOptions, name_filter};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchDnsViewsParams {
    /// Exact view name.
    pub name: Option<String>,

    /// Regular expression matched against the view name.
    pub name_regex: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchDnsViewsTool;

impl ToolDefinition for SearchDnsViewsTool {
    const NAME: &'static str = "search_dns_views";
    const DESCRIPTION: &'static str = "List DNS views (split-horizon namespaces) on the grid.";
    const READ_ONLY: bool = true;
    type Params = SearchDnsViewsParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        let request = name_filter(WapiRequest::get("view"), "name", params.name, params.name_regex)?;
        params.options.apply(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{query_value, rejected, request_for};
    use serde_json::json;

    #[test]
    fn test_by_name() {
        let request = request_for::<SearchDnsViewsTool>(json!({"name": "external"}));
        assert_eq!(request.path, "view");
        assert_eq!(query_value(&request, "name"), Some("external"));
    }

    #[test]
    fn test_name_and_regex_conflict() {
        assert!(rejected::<SearchDnsViewsTool>(json!({
            "name": "external",
            "name_regex": "ext.*"
        })));
    }
}
