//! Host record tools (`record:host`).
//!
//! A host record bundles A/PTR records (and optionally DHCP fixed
//! addresses) under one object, which makes it the usual way to provision
//! a managed device.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, name_filter, require_non_empty, validate_ipv4,
    validate_ipv4_or_next_available, validate_mac,
};

const OBJECT: &str = "record:host";

/// Parameters for searching host records.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchHostRecordsParams {
    /// Exact host name (FQDN).
    pub name: Option<String>,

    /// Regular expression matched against the host name.
    pub name_regex: Option<String>,

    /// IPv4 address assigned to the host.
    pub ipv4addr: Option<String>,

    /// Zone the record belongs to.
    pub zone: Option<String>,

    /// DNS view.
    pub view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchHostRecordsTool;

impl ToolDefinition for SearchHostRecordsTool {
    const NAME: &'static str = "search_host_records";
    const DESCRIPTION: &'static str =
        "Search host records by name, name regex, IPv4 address, zone or view.";
    const READ_ONLY: bool = true;
    type Params = SearchHostRecordsParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        if let Some(ip) = &params.ipv4addr {
            validate_ipv4("ipv4addr", ip)?;
        }
        let request = name_filter(WapiRequest::get(OBJECT), "name", params.name, params.name_regex)?
            .query_opt("ipv4addr", params.ipv4addr)
            .query_opt("zone", params.zone)
            .query_opt("view", params.view);
        params.options.apply(request)
    }
}

/// One address assigned to a host record.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HostAddress {
    /// IPv4 address, or "func:nextavailableip:<network>[,<network_view>]".
    pub ipv4addr: String,

    /// MAC address; required when DHCP is enabled for this address.
    pub mac: Option<String>,

    /// Create a DHCP fixed address for this entry.
    #[serde(default)]
    pub configure_for_dhcp: bool,
}

/// Parameters for creating a host record.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateHostRecordParams {
    /// Host name (FQDN).
    pub name: String,

    /// Addresses assigned to the host (at least one).
    pub ipv4addrs: Vec<HostAddress>,

    /// Create DNS records for the host (default: true).
    #[serde(default = "default_configure_for_dns")]
    pub configure_for_dns: bool,

    /// DNS view.
    pub view: Option<String>,

    /// Free-form comment.
    pub comment: Option<String>,
}

fn default_configure_for_dns() -> bool {
    true
}

pub struct CreateHostRecordTool;

impl ToolDefinition for CreateHostRecordTool {
    const NAME: &'static str = "create_host_record";
    const DESCRIPTION: &'static str = "Create a host record with one or more IPv4 addresses. Addresses may use func:nextavailableip:<network> to allocate from a network; set configure_for_dhcp with a MAC to reserve the address in DHCP.";
    const READ_ONLY: bool = false;
    type Params = CreateHostRecordParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        require_non_empty("name", &params.name)?;
        if params.ipv4addrs.is_empty() {
            return Err(ToolError::invalid_arguments(
                "ipv4addrs must contain at least one address",
            ));
        }

        let mut addresses = Vec::with_capacity(params.ipv4addrs.len());
        for address in params.ipv4addrs {
            validate_ipv4_or_next_available("ipv4addr", &address.ipv4addr)?;
            if let Some(mac) = &address.mac {
                validate_mac("mac", mac)?;
            }
            if address.configure_for_dhcp && address.mac.is_none() {
                return Err(ToolError::invalid_arguments(format!(
                    "mac is required when configure_for_dhcp is set ({})",
                    address.ipv4addr
                )));
            }

            let mut entry = ObjectBody::new()
                .field("ipv4addr", address.ipv4addr)
                .field_opt("mac", address.mac);
            if address.configure_for_dhcp {
                entry = entry.field("configure_for_dhcp", true);
            }
            addresses.push(entry.build());
        }

        let body = ObjectBody::new()
            .field("name", params.name)
            .field("ipv4addrs", Value::Array(addresses))
            .field("configure_for_dns", params.configure_for_dns)
            .field_opt("view", params.view)
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
    fn test_search_by_name() {
        let request = request_for::<SearchHostRecordsTool>(json!({
            "name": "server1.example.com",
            "return_fields": ["ipv4addrs", "extattrs"]
        }));
        assert_eq!(request.path, "record:host");
        assert_eq!(query_value(&request, "name"), Some("server1.example.com"));
        assert_eq!(query_value(&request, "_return_fields+"), Some("ipv4addrs,extattrs"));
    }

    #[test]
    fn test_create_body() {
        let request = request_for::<CreateHostRecordTool>(json!({
            "name": "server1.example.com",
            "ipv4addrs": [
                {"ipv4addr": "func:nextavailableip:10.0.0.0/24"},
                {"ipv4addr": "10.0.1.5", "mac": "00:11:22:33:44:55", "configure_for_dhcp": true}
            ],
            "view": "default"
        }));
        assert_eq!(
            request.body,
            Some(json!({
                "name": "server1.example.com",
                "ipv4addrs": [
                    {"ipv4addr": "func:nextavailableip:10.0.0.0/24"},
                    {"ipv4addr": "10.0.1.5", "mac": "00:11:22:33:44:55", "configure_for_dhcp": true}
                ],
                "configure_for_dns": true,
                "view": "default"
            }))
        );
    }

    #[test]
    fn test_create_rejects_empty_address_list() {
        assert!(rejected::<CreateHostRecordTool>(json!({
            "name": "server1.example.com",
            "ipv4addrs": []
        })));
    }

    #[test]
    fn test_create_dhcp_requires_mac() {
        assert!(rejected::<CreateHostRecordTool>(json!({
            "name": "server1.example.com",
            "ipv4addrs": [{"ipv4addr": "10.0.1.5", "configure_for_dhcp": true}]
        })));
    }
}
