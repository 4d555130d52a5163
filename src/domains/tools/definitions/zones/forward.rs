//! Forward zone tools (`zone_forward`).

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, require_non_empty, validate_ip,
};

const OBJECT: &str = "zone_forward";

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchForwardZonesParams {
    /// Zone name.
    pub fqdn: Option<String>,

    /// DNS view.
    pub view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchForwardZonesTool;

impl ToolDefinition for SearchForwardZonesTool {
    const NAME: &'static str = "search_forward_zones";
    const DESCRIPTION: &'static str = "Search forward zones (zones whose queries are forwarded to other servers) by name or view.";
    const READ_ONLY: bool = true;
    type Params = SearchForwardZonesParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        let request = WapiRequest::get(OBJECT)
            .query_opt("fqdn", params.fqdn)
            .query_opt("view", params.view);
        params.options.apply(request)
    }
}

/// A server queries are forwarded to.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Forwarder {
    /// Server IP address.
    pub address: String,

    /// Server name.
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateForwardZoneParams {
    /// Zone name.
    pub fqdn: String,

    /// Servers to forward queries to (at least one).
    pub forward_to: Vec<Forwarder>,

    /// DNS view.
    pub view: Option<String>,

    /// Free-form comment.
    pub comment: Option<String>,
}

pub struct CreateForwardZoneTool;

impl ToolDefinition for CreateForwardZoneTool {
    const NAME: &'static str = "create_forward_zone";
    const DESCRIPTION: &'static str =
        "Create a forward zone that sends queries for a domain to the given servers.";
    const READ_ONLY: bool = false;
    type Params = CreateForwardZoneParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        require_non_empty("fqdn", &params.fqdn)?;
        if params.forward_to.is_empty() {
            return Err(ToolError::invalid_arguments(
                "forward_to must contain at least one server",
            ));
        }

        let mut forwarders: Vec<Value> = Vec::with_capacity(params.forward_to.len());
        for server in params.forward_to {
            validate_ip("forward_to.address", &server.address)?;
            require_non_empty("forward_to.name", &server.name)?;
            forwarders.push(json!({"address": server.address, "name": server.name}));
        }

        let body = ObjectBody::new()
            .field("fqdn", params.fqdn)
            .field("forward_to", forwarders)
            .field_opt("view", params.view)
            .field_opt("comment", params.comment)
            .build();

        Ok(WapiRequest::post(OBJECT).body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{rejected, request_for};

    #[test]
    fn test_create_body() {
        let request = request_for::<CreateForwardZoneTool>(json!({
            "fqdn": "corp.partner.net",
            "forward_to": [{"address": "192.0.2.53", "name": "ns.partner.net"}]
        }));
        assert_eq!(
            request.body,
            Some(json!({
                "fqdn": "corp.partner.net",
                "forward_to": [{"address": "192.0.2.53", "name": "ns.partner.net"}]
            }))
        );
    }

    #[test]
    fn test_create_requires_forwarders() {
        assert!(rejected::<CreateForwardZoneTool>(json!({
            "fqdn": "corp.partner.net",
            "forward_to": []
        })));
        assert!(rejected::<CreateForwardZoneTool>(json!({
            "fqdn": "corp.partner.net",
            "forward_to": [{"address": "ns.partner.net", "name": "ns.partner.net"}]
        })));
    }
}
