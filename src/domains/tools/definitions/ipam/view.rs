//! Network view tools (`networkview`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{SearchOptions, name_filter};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchNetworkViewsParams {
    /// Exact network view name.
    pub name: Option<String>,

    /// Regular expression matched against the view name.
    pub name_regex: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchNetworkViewsTool;

impl ToolDefinition for SearchNetworkViewsTool {
    const NAME: &'static str = "search_network_views";
    const DESCRIPTION: &'static str =
        "List network views (separate IP address spaces) on the grid, optionally filtered by name.";
    const READ_ONLY: bool = true;
    type Params = SearchNetworkViewsParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        let request = name_filter(
            WapiRequest::get("networkview"),
            "name",
            params.name,
            params.name_regex,
        )?;
        params.options.apply(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{query_value, request_for};
    use serde_json::json;

    #[test]
    fn test_list_all_views() {
        let request = request_for::<SearchNetworkViewsTool>(json!({}));
        assert_eq!(request.path, "networkview");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_regex_filter() {
        let request = request_for::<SearchNetworkViewsTool>(json!({"name_regex": "^lab"}));
        assert_eq!(query_value(&request, "name~"), Some("^lab"));
    }
}
