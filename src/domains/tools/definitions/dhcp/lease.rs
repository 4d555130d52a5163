//! DHCP lease lookup (`lease`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{SearchOptions, validate_ipv4, validate_mac};

/// Lease binding state as reported by the DHCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BindingState {
    Active,
    Free,
    Backup,
    Expired,
    Released,
    Abandoned,
    Static,
}

impl BindingState {
    fn as_str(self) -> &'static str {
        match self {
            BindingState::Active => "ACTIVE",
            BindingState::Free => "FREE",
            BindingState::Backup => "BACKUP",
            BindingState::Expired => "EXPIRED",
            BindingState::Released => "RELEASED",
            BindingState::Abandoned => "ABANDONED",
            BindingState::Static => "STATIC",
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchDhcpLeasesParams {
    /// Leased IPv4 address.
    pub address: Option<String>,

    /// Client MAC address.
    pub hardware: Option<String>,

    /// Client-supplied host name.
    pub client_hostname: Option<String>,

    /// Lease binding state.
    pub binding_state: Option<BindingState>,

    /// Network view.
    pub network_view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchDhcpLeasesTool;

impl ToolDefinition for SearchDhcpLeasesTool {
    const NAME: &'static str = "search_dhcp_leases";
    const DESCRIPTION: &'static str =
        "Look up DHCP leases by address, client MAC, client host name or binding state.";
    const READ_ONLY: bool = true;
    type Params = SearchDhcpLeasesParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        if let Some(address) = &params.address {
            validate_ipv4("address", address)?;
        }
        if let Some(mac) = &params.hardware {
            validate_mac("hardware", mac)?;
        }
        let request = WapiRequest::get("lease")
            .query_opt("address", params.address)
            .query_opt("hardware", params.hardware)
            .query_opt("client_hostname", params.client_hostname)
            .query_opt("binding_state", params.binding_state.map(BindingState::as_str))
            .query_opt("network_view", params.network_view);
        params.options.apply(request)
    }
}
