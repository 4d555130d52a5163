//! IP address tools (`ipv4address` and `next_available_ip`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, validate_cidr, validate_ipv4, validate_ref_type,
};

/// Maximum number of addresses returned by one `next_available_ip` call.
const MAX_IPS_PER_CALL: u32 = 20;

/// Usage status of an address as tracked by IPAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressStatus {
    Used,
    Unused,
}

impl AddressStatus {
    fn as_str(self) -> &'static str {
        match self {
            AddressStatus::Used => "USED",
            AddressStatus::Unused => "UNUSED",
        }
    }
}

/// Parameters for searching IPv4 addresses.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchIpAddressesParams {
    /// A single IPv4 address.
    pub ip_address: Option<String>,

    /// All addresses in this network (CIDR).
    pub network: Option<String>,

    /// Filter by usage status.
    pub status: Option<AddressStatus>,

    /// Network view.
    pub network_view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchIpAddressesTool;

impl ToolDefinition for SearchIpAddressesTool {
    const NAME: &'static str = "search_ip_addresses";
    const DESCRIPTION: &'static str = "Look up IPv4 address usage: which objects (host records, leases, fixed addresses) use an address, or the used/unused addresses of a network.";
    const READ_ONLY: bool = true;
    type Params = SearchIpAddressesParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        if params.ip_address.is_none() && params.network.is_none() {
            return Err(ToolError::invalid_arguments(
                "Provide ip_address or network",
            ));
        }
        if let Some(ip) = &params.ip_address {
            validate_ipv4("ip_address", ip)?;
        }
        if let Some(network) = &params.network {
            validate_cidr("network", network)?;
        }

        let request = WapiRequest::get("ipv4address")
            .query_opt("ip_address", params.ip_address)
            .query_opt("network", params.network)
            .query_opt("status", params.status.map(AddressStatus::as_str))
            .query_opt("network_view", params.network_view);
        params.options.apply(request)
    }
}

/// Parameters for finding free addresses in a network.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NextAvailableIpParams {
    /// `_ref` of the network to allocate from.
    pub network_ref: String,

    /// Number of addresses to return (1-20, default 1).
    #[serde(default = "default_num")]
    pub num: u32,

    /// Addresses that must not be returned.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_num() -> u32 {
    1
}

pub struct NextAvailableIpTool;

impl ToolDefinition for NextAvailableIpTool {
    const NAME: &'static str = "get_next_available_ip";
    const DESCRIPTION: &'static str = "Return the next free IPv4 addresses in a network without reserving them. To allocate atomically, create a host record with func:nextavailableip:<network> instead.";
    const READ_ONLY: bool = true;
    type Params = NextAvailableIpParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        validate_ref_type("network_ref", &params.network_ref, "network")?;
        if params.num == 0 || params.num > MAX_IPS_PER_CALL {
            return Err(ToolError::invalid_arguments(format!(
                "num must be between 1 and {}",
                MAX_IPS_PER_CALL
            )));
        }
        for ip in &params.exclude {
            validate_ipv4("exclude", ip)?;
        }

        let mut body = ObjectBody::new().field("num", params.num);
        if !params.exclude.is_empty() {
            body = body.field("exclude", params.exclude);
        }

        Ok(WapiRequest::post(params.network_ref)
            .function("next_available_ip")
            .body(body.build()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{query_value, rejected, request_for};
    use reqwest::Method;
    use serde_json::json;

    const NETWORK: &str = "network/ZG5zLm5ldHdvcmskMTAuMC4wLjAvMjQvMA:10.0.0.0/24/default";

    #[test]
    fn test_search_network_unused() {
        let request = request_for::<SearchIpAddressesTool>(json!({
            "network": "10.0.0.0/24",
            "status": "UNUSED",
            "max_results": 10
        }));
        assert_eq!(request.path, "ipv4address");
        assert_eq!(query_value(&request, "status"), Some("UNUSED"));
        assert_eq!(query_value(&request, "_max_results"), Some("10"));
    }

    #[test]
    fn test_search_requires_address_or_network() {
        assert!(rejected::<SearchIpAddressesTool>(json!({"status": "USED"})));
    }

    #[test]
    fn test_search_rejects_unknown_status() {
        assert!(rejected::<SearchIpAddressesTool>(json!({
            "ip_address": "10.0.0.1",
            "status": "RESERVED"
        })));
    }

    #[test]
    fn test_next_available_ip_defaults() {
        let request = request_for::<NextAvailableIpTool>(json!({"network_ref": NETWORK}));
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, NETWORK);
        assert_eq!(query_value(&request, "_function"), Some("next_available_ip"));
        assert_eq!(request.body, Some(json!({"num": 1})));
    }

    #[test]
    fn test_next_available_ip_exclude() {
        let request = request_for::<NextAvailableIpTool>(json!({
            "network_ref": NETWORK,
            "num": 3,
            "exclude": ["10.0.0.1", "10.0.0.2"]
        }));
        assert_eq!(
            request.body,
            Some(json!({"num": 3, "exclude": ["10.0.0.1", "10.0.0.2"]}))
        );
    }

    #[test]
    fn test_next_available_ip_rejects_container_ref() {
        assert!(rejected::<NextAvailableIpTool>(json!({
            "network_ref": "networkcontainer/ZG5z:10.0.0.0/8/default"
        })));
    }

    #[test]
    fn test_next_available_ip_num_bounds() {
        assert!(rejected::<NextAvailableIpTool>(json!({"network_ref": NETWORK, "num": 0})));
        assert!(rejected::<NextAvailableIpTool>(json!({"network_ref": NETWORK, "num": 21})));
        let request = request_for::<NextAvailableIpTool>(json!({"network_ref": NETWORK, "num": 20}));
        assert_eq!(request.body.unwrap()["num"], 20);
    }
}
