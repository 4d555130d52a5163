//! DHCP fixed address tools (`fixedaddress`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, validate_ipv4, validate_ipv4_or_next_available, validate_mac,
};

const OBJECT: &str = "fixedaddress";

/// Parameters for searching fixed addresses.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchFixedAddressesParams {
    /// Reserved IPv4 address.
    pub ipv4addr: Option<String>,

    /// Client MAC address.
    pub mac: Option<String>,

    /// Network (CIDR) containing the reservation.
    pub network: Option<String>,

    /// Network view.
    pub network_view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchFixedAddressesTool;

impl ToolDefinition for SearchFixedAddressesTool {
    const NAME: &'static str = "search_fixed_addresses";
    const DESCRIPTION: &'static str =
        "Search DHCP fixed addresses (reservations) by IPv4 address, MAC, network or network view.";
    const READ_ONLY: bool = true;
    type Params = SearchFixedAddressesParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        if let Some(ip) = &params.ipv4addr {
            validate_ipv4("ipv4addr", ip)?;
        }
        if let Some(mac) = &params.mac {
            validate_mac("mac", mac)?;
        }
        let request = WapiRequest::get(OBJECT)
            .query_opt("ipv4addr", params.ipv4addr)
            .query_opt("mac", params.mac)
            .query_opt("network", params.network)
            .query_opt("network_view", params.network_view);
        params.options.apply(request)
    }
}

/// Parameters for creating a fixed address.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateFixedAddressParams {
    /// IPv4 address, or "func:nextavailableip:<network>[,<network_view>]".
    pub ipv4addr: String,

    /// Client MAC address (aa:bb:cc:dd:ee:ff).
    pub mac: String,

    /// Reservation name.
    pub name: Option<String>,

    /// Network view.
    pub network_view: Option<String>,

    /// Free-form comment.
    pub comment: Option<String>,
}

pub struct CreateFixedAddressTool;

impl ToolDefinition for CreateFixedAddressTool {
    const NAME: &'static str = "create_fixed_address";
    const DESCRIPTION: &'static str =
        "Reserve an IPv4 address for a MAC address with a DHCP fixed address.";
    const READ_ONLY: bool = false;
    type Params = CreateFixedAddressParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        validate_ipv4_or_next_available("ipv4addr", &params.ipv4addr)?;
        validate_mac("mac", &params.mac)?;

        let body = ObjectBody::new()
            .field("ipv4addr", params.ipv4addr)
            .field("mac", params.mac)
            .field_opt("name", params.name)
            .field_opt("network_view", params.network_view)
            .field_opt("comment", params.comment)
            .build();

        Ok(WapiRequest::post(OBJECT).body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{query_value, rejected, request_for};
    use serde_json::json;

    #[test]
    fn test_search_by_mac() {
        let request = request_for::<SearchFixedAddressesTool>(json!({"mac": "00:11:22:33:44:55"}));
        assert_eq!(request.path, "fixedaddress");
        assert_eq!(query_value(&request, "mac"), Some("00:11:22:33:44:55"));
    }

    #[test]
    fn test_create_body() {
        let request = request_for::<CreateFixedAddressTool>(json!({
            "ipv4addr": "10.0.0.50",
            "mac": "00:11:22:33:44:55",
            "name": "printer-2f"
        }));
        assert_eq!(
            request.body,
            Some(json!({
                "ipv4addr": "10.0.0.50",
                "mac": "00:11:22:33:44:55",
                "name": "printer-2f"
            }))
        );
    }

    #[test]
    fn test_create_rejects_bad_mac() {
        assert!(rejected::<CreateFixedAddressTool>(json!({
            "ipv4addr": "10.0.0.50",
            "mac": "0011.2233.4455"
        })));
    }
}
