//! Authoritative zone tools (`zone_auth`).

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{ObjectBody, SearchOptions, require_non_empty};

const OBJECT: &str = "zone_auth";

/// Kind of authoritative zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneFormat {
    /// Forward-mapping zone (names to addresses).
    Forward,
    /// IPv4 reverse-mapping zone; the fqdn is a network such as "10.0.0.0/24".
    Ipv4,
    /// IPv6 reverse-mapping zone.
    Ipv6,
}

impl ZoneFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneFormat::Forward => "FORWARD",
            ZoneFormat::Ipv4 => "IPV4",
            ZoneFormat::Ipv6 => "IPV6",
        }
    }
}

/// Parameters for searching authoritative zones.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchAuthZonesParams {
    /// Zone name, e.g. "example.com" or "10.0.0.0/24".
    pub fqdn: Option<String>,

    /// DNS view.
    pub view: Option<String>,

    /// Zone kind.
    pub zone_format: Option<ZoneFormat>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchAuthZonesTool;

impl ToolDefinition for SearchAuthZonesTool {
    const NAME: &'static str = "search_auth_zones";
    const DESCRIPTION: &'static str =
        "Search authoritative DNS zones by name, view or format (FORWARD, IPV4, IPV6).";
    const READ_ONLY: bool = true;
    type Params = SearchAuthZonesParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        let request = WapiRequest::get(OBJECT)
            .query_opt("fqdn", params.fqdn)
            .query_opt("view", params.view)
            .query_opt("zone_format", params.zone_format.map(ZoneFormat::as_str));
        params.options.apply(request)
    }
}

/// Parameters for creating an authoritative zone.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateAuthZoneParams {
    /// Zone name; a network in CIDR notation for reverse zones.
    pub fqdn: String,

    /// DNS view.
    pub view: Option<String>,

    /// Zone kind (default FORWARD).
    pub zone_format: Option<ZoneFormat>,

    /// Grid members acting as primary servers for the zone.
    #[serde(default)]
    pub grid_primary: Vec<String>,

    /// Free-form comment.
    pub comment: Option<String>,
}

pub struct CreateAuthZoneTool;

impl ToolDefinition for CreateAuthZoneTool {
    const NAME: &'static str = "create_auth_zone";
    const DESCRIPTION: &'static str = "Create an authoritative DNS zone. Use zone_format IPV4 or IPV6 with a CIDR fqdn for reverse zones.";
    const READ_ONLY: bool = false;
    type Params = CreateAuthZoneParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        require_non_empty("fqdn", &params.fqdn)?;
        let reverse = matches!(params.zone_format, Some(ZoneFormat::Ipv4 | ZoneFormat::Ipv6));
        if reverse && !params.fqdn.contains('/') {
            return Err(ToolError::invalid_arguments(format!(
                "Reverse zones take a network in CIDR notation as fqdn: {}",
                params.fqdn
            )));
        }

        let mut body = ObjectBody::new()
            .field("fqdn", params.fqdn)
            .field_opt("view", params.view)
            .field_opt("zone_format", params.zone_format.map(ZoneFormat::as_str))
            .field_opt("comment", params.comment);

        if !params.grid_primary.is_empty() {
            let primaries: Vec<Value> = params
                .grid_primary
                .into_iter()
                .map(|name| json!({"name": name}))
                .collect();
            body = body.field("grid_primary", primaries);
        }

        Ok(WapiRequest::post(OBJECT).body(body.build()))
    }
}
