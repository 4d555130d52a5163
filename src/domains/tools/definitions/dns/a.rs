//! A record tools (`record:a`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, name_filter, require_non_empty, validate_ipv4,
    validate_ipv4_or_next_available,
};

const OBJECT: &str = "record:a";

// ============================================================================
// Search
// ============================================================================

/// Parameters for searching A records.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchARecordsParams {
    /// Exact record name (FQDN), e.g. "www.example.com".
    pub name: Option<String>,

    /// Regular expression matched against the record name.
    pub name_regex: Option<String>,

    /// IPv4 address the record resolves to.
    pub ipv4addr: Option<String>,

    /// Zone the record belongs to.
    pub zone: Option<String>,

    /// DNS view (the grid default view when omitted).
    pub view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchARecordsTool;

impl ToolDefinition for SearchARecordsTool {
    const NAME: &'static str = "search_a_records";
    const DESCRIPTION: &'static str = "Search DNS A records by name, name regex, IPv4 address, zone or view. Returns the raw WAPI objects including their _ref.";
    const READ_ONLY: bool = true;
    type Params = SearchARecordsParams;

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

// ============================================================================
// Create
// ============================================================================

/// Parameters for creating an A record.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateARecordParams {
    /// Record name (FQDN) inside an existing authoritative zone.
    pub name: String,

    /// IPv4 address, or "func:nextavailableip:<network>" to allocate one.
    pub ipv4addr: String,

    /// DNS view.
    pub view: Option<String>,

    /// Record TTL in seconds; inherits the zone TTL when omitted.
    pub ttl: Option<u32>,

    /// Free-form comment.
    pub comment: Option<String>,
}

pub struct CreateARecordTool;

impl ToolDefinition for CreateARecordTool {
    const NAME: &'static str = "create_a_record";
    const DESCRIPTION: &'static str = "Create a DNS A record mapping a name to an IPv4 address. Returns the _ref of the new record.";
    const READ_ONLY: bool = false;
    type Params = CreateARecordParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        require_non_empty("name", &params.name)?;
        validate_ipv4_or_next_available("ipv4addr", &params.ipv4addr)?;

        let body = ObjectBody::new()
            .field("name", params.name)
            .field("ipv4addr", params.ipv4addr)
            .field_opt("view", params.view)
            .ttl(params.ttl)
            .field_opt("comment", params.comment)
            .build();

        Ok(WapiRequest::post(OBJECT).body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{query_value, rejected, request_for};
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_search_by_address_and_zone() {
        let request = request_for::<SearchARecordsTool>(json!({
            "ipv4addr": "192.0.2.10",
            "zone": "example.com",
            "max_results": 10
        }));
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "record:a");
        assert_eq!(query_value(&request, "ipv4addr"), Some("192.0.2.10"));
        assert_eq!(query_value(&request, "zone"), Some("example.com"));
        assert_eq!(query_value(&request, "_max_results"), Some("10"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_search_by_regex() {
        let request = request_for::<SearchARecordsTool>(json!({"name_regex": "^web[0-9]+"}));
        assert_eq!(query_value(&request, "name~"), Some("^web[0-9]+"));
        assert_eq!(query_value(&request, "name"), None);
    }

    #[test]
    fn test_search_rejects_bad_address() {
        assert!(rejected::<SearchARecordsTool>(json!({"ipv4addr": "300.1.1.1"})));
    }

    #[test]
    fn test_create_body() {
        let request = request_for::<CreateARecordTool>(json!({
            "name": "www.example.com",
            "ipv4addr": "192.0.2.10",
            "ttl": 600,
            "comment": "web frontend"
        }));
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "record:a");
        assert_eq!(
            request.body,
            Some(json!({
                "name": "www.example.com",
                "ipv4addr": "192.0.2.10",
                "ttl": 600,
                "use_ttl": true,
                "comment": "web frontend"
            }))
        );
    }

    #[test]
    fn test_create_with_next_available_ip() {
        let request = request_for::<CreateARecordTool>(json!({
            "name": "app.example.com",
            "ipv4addr": "func:nextavailableip:10.0.0.0/24,default"
        }));
        assert_eq!(
            request.body.unwrap()["ipv4addr"],
            "func:nextavailableip:10.0.0.0/24,default"
        );
    }

    #[test]
    fn test_create_requires_fields() {
        assert!(rejected::<CreateARecordTool>(json!({"name": "www.example.com"})));
        assert!(rejected::<CreateARecordTool>(json!({"name": " ", "ipv4addr": "192.0.2.1"})));
        assert!(rejected::<CreateARecordTool>(json!({"name": "www.example.com", "ipv4addr": "example"})));
    }
}
