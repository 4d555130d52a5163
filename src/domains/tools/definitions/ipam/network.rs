//! Network tools (`network`).

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, require_non_empty, validate_cidr, validate_ipv4,
};

const OBJECT: &str = "network";

/// Parameters for searching IPv4 networks.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchNetworksParams {
    /// Network in CIDR notation, e.g. "10.0.0.0/24".
    pub network: Option<String>,

    /// Network view (the default view when omitted).
    pub network_view: Option<String>,

    /// Regular expression matched against the network comment.
    pub comment_regex: Option<String>,

    /// Return the network that contains this IPv4 address.
    pub contains_address: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchNetworksTool;

impl ToolDefinition for SearchNetworksTool {
    const NAME: &'static str = "search_networks";
    const DESCRIPTION: &'static str = "Search IPv4 networks by CIDR, network view, comment regex, or find the network containing an address.";
    const READ_ONLY: bool = true;
    type Params = SearchNetworksParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        if let Some(network) = &params.network {
            validate_cidr("network", network)?;
        }
        if let Some(address) = &params.contains_address {
            validate_ipv4("contains_address", address)?;
        }
        let request = WapiRequest::get(OBJECT)
            .query_opt("network", params.network)
            .query_opt("network_view", params.network_view)
            .query_opt("comment~", params.comment_regex)
            .query_opt("contains_address", params.contains_address);
        params.options.apply(request)
    }
}

/// Parameters for creating an IPv4 network.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateNetworkParams {
    /// Network in CIDR notation.
    pub network: String,

    /// Network view.
    pub network_view: Option<String>,

    /// Free-form comment.
    pub comment: Option<String>,

    /// Grid members that serve DHCP for this network.
    #[serde(default)]
    pub members: Vec<String>,
}

pub struct CreateNetworkTool;

impl ToolDefinition for CreateNetworkTool {
    const NAME: &'static str = "create_network";
    const DESCRIPTION: &'static str = "Create an IPv4 network, optionally assigning the grid members that serve DHCP for it.";
    const READ_ONLY: bool = false;
    type Params = CreateNetworkParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        validate_cidr("network", &params.network)?;
        for member in &params.members {
            require_non_empty("members", member)?;
        }

        let mut body = ObjectBody::new()
            .field("network", params.network)
            .field_opt("network_view", params.network_view)
            .field_opt("comment", params.comment);

        if !params.members.is_empty() {
            let members: Vec<Value> = params
                .members
                .into_iter()
                .map(|name| json!({"_struct": "dhcpmember", "name": name}))
                .collect();
            body = body.field("members", members);
        }

        Ok(WapiRequest::post(OBJECT).body(body.build()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{query_value, rejected, request_for};

    #[test]
    fn test_search_contains_address() {
        let request = request_for::<SearchNetworksTool>(json!({
            "contains_address": "10.1.2.3",
            "network_view": "corp"
        }));
        assert_eq!(request.path, "network");
        assert_eq!(query_value(&request, "contains_address"), Some("10.1.2.3"));
        assert_eq!(query_value(&request, "network_view"), Some("corp"));
    }

    #[test]
    fn test_search_comment_regex() {
        let request = request_for::<SearchNetworksTool>(json!({"comment_regex": "(?i)lab"}));
        assert_eq!(query_value(&request, "comment~"), Some("(?i)lab"));
    }

    #[test]
    fn test_create_with_members() {
        let request = request_for::<CreateNetworkTool>(json!({
            "network": "10.20.0.0/22",
            "comment": "build farm",
            "members": ["dhcp1.example.com"]
        }));
        assert_eq!(
            request.body,
            Some(json!({
                "network": "10.20.0.0/22",
                "comment": "build farm",
                "members": [{"_struct": "dhcpmember", "name": "dhcp1.example.com"}]
            }))
        );
    }

    #[test]
    fn test_create_rejects_missing_prefix() {
        assert!(rejected::<CreateNetworkTool>(json!({"network": "10.20.0.0"})));
    }
}
