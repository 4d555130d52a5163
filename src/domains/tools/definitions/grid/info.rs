//! Grid and member lookups (`grid`, `member`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::SearchOptions;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetGridInfoParams {
    /// Additional grid fields to return, e.g. ["dns_resolver_setting", "ntp_setting"].
    #[serde(default)]
    pub return_fields: Option<Vec<String>>,
}

pub struct GetGridInfoTool;

impl ToolDefinition for GetGridInfoTool {
    const NAME: &'static str = "get_grid_info";
    const DESCRIPTION: &'static str = "Return the grid object, including its _ref (needed by restart_grid_services) and any requested settings.";
    const READ_ONLY: bool = true;
    type Params = GetGridInfoParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        Ok(WapiRequest::get("grid").return_fields(params.return_fields.as_deref()))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchGridMembersParams {
    /// Member host name (FQDN).
    pub host_name: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchGridMembersTool;

impl ToolDefinition for SearchGridMembersTool {
    const NAME: &'static str = "search_grid_members";
    const DESCRIPTION: &'static str =
        "List grid members (appliances), optionally filtered by host name.";
    const READ_ONLY: bool = true;
    type Params = SearchGridMembersParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        let request = WapiRequest::get("member").query_opt("host_name", params.host_name);
        params.options.apply(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{query_value, request_for};
    use serde_json::json;

    #[test]
    fn test_grid_info_fields() {
        let request = request_for::<GetGridInfoTool>(json!({"return_fields": ["name"]}));
        assert_eq!(request.path, "grid");
        assert_eq!(query_value(&request, "_return_fields+"), Some("name"));
    }

    #[test]
    fn test_grid_info_no_arguments() {
        let request = request_for::<GetGridInfoTool>(json!({}));
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_member_by_host() {
        let request = request_for::<SearchGridMembersTool>(json!({"host_name": "gm.example.com"}));
        assert_eq!(request.path, "member");
        assert_eq!(query_value(&request, "host_name"), Some("gm.example.com"));
    }
}
