//! DHCP range tools (`range`).

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, parse_ipv4, require_non_empty, validate_cidr, validate_ipv4,
};

const OBJECT: &str = "range";

/// Parameters for searching DHCP ranges.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchDhcpRangesParams {
    /// Network (CIDR) the range belongs to.
    pub network: Option<String>,

    /// First address of the range.
    pub start_addr: Option<String>,

    /// Last address of the range.
    pub end_addr: Option<String>,

    /// Network view.
    pub network_view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchDhcpRangesTool;

impl ToolDefinition for SearchDhcpRangesTool {
    const NAME: &'static str = "search_dhcp_ranges";
    const DESCRIPTION: &'static str =
        "Search DHCP address ranges by network, start or end address, or network view.";
    const READ_ONLY: bool = true;
    type Params = SearchDhcpRangesParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        if let Some(network) = &params.network {
            validate_cidr("network", network)?;
        }
        if let Some(start) = &params.start_addr {
            validate_ipv4("start_addr", start)?;
        }
        if let Some(end) = &params.end_addr {
            validate_ipv4("end_addr", end)?;
        }
        let request = WapiRequest::get(OBJECT)
            .query_opt("network", params.network)
            .query_opt("start_addr", params.start_addr)
            .query_opt("end_addr", params.end_addr)
            .query_opt("network_view", params.network_view);
        params.options.apply(request)
    }
}

/// Parameters for creating a DHCP range.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDhcpRangeParams {
    /// First address handed out.
    pub start_addr: String,

    /// Last address handed out.
    pub end_addr: String,

    /// Enclosing network (CIDR). Inferred by the grid when omitted.
    pub network: Option<String>,

    /// Network view.
    pub network_view: Option<String>,

    /// Grid member that serves this range.
    pub member: Option<String>,

    /// Display name.
    pub name: Option<String>,

    /// Free-form comment.
    pub comment: Option<String>,
}

pub struct CreateDhcpRangeTool;

impl ToolDefinition for CreateDhcpRangeTool {
    const NAME: &'static str = "create_dhcp_range";
    const DESCRIPTION: &'static str = "Create a DHCP range inside an existing network, optionally served by a specific grid member.";
    const READ_ONLY: bool = false;
    type Params = CreateDhcpRangeParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        let start = parse_ipv4("start_addr", &params.start_addr)?;
        let end = parse_ipv4("end_addr", &params.end_addr)?;
        if start > end {
            return Err(ToolError::invalid_arguments(format!(
                "start_addr {} is after end_addr {}",
                params.start_addr, params.end_addr
            )));
        }
        if let Some(network) = &params.network {
            validate_cidr("network", network)?;
        }

        let mut body = ObjectBody::new()
            .field("start_addr", params.start_addr)
            .field("end_addr", params.end_addr)
            .field_opt("network", params.network)
            .field_opt("network_view", params.network_view)
            .field_opt("name", params.name)
            .field_opt("comment", params.comment);

        if let Some(member) = params.member {
            require_non_empty("member", &member)?;
            body = body
                .field("server_association_type", "MEMBER")
                .field("member", json!({"_struct": "dhcpmember", "name": member}));
        }

        Ok(WapiRequest::post(OBJECT).body(body.build()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{query_value, rejected, request_for};

    #[test]
    fn test_search_by_network() {
        let request = request_for::<SearchDhcpRangesTool>(json!({"network": "10.0.0.0/24"}));
        assert_eq!(request.path, "range");
        assert_eq!(query_value(&request, "network"), Some("10.0.0.0/24"));
    }

    #[test]
    fn test_create_with_member() {
        let request = request_for::<CreateDhcpRangeTool>(json!({
            "start_addr": "10.0.0.100",
            "end_addr": "10.0.0.200",
            "member": "dhcp1.example.com"
        }));
        assert_eq!(
            request.body,
            Some(json!({
                "start_addr": "10.0.0.100",
                "end_addr": "10.0.0.200",
                "server_association_type": "MEMBER",
                "member": {"_struct": "dhcpmember", "name": "dhcp1.example.com"}
            }))
        );
    }

    #[test]
    fn test_create_rejects_inverted_range() {
        assert!(rejected::<CreateDhcpRangeTool>(json!({
            "start_addr": "10.0.0.200",
            "end_addr": "10.0.0.100"
        })));
    }
}
