//! AAAA record tools (`record:aaaa`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, name_filter, require_non_empty, validate_ipv6,
};

const OBJECT: &str = "record:aaaa";

/// Parameters for searching AAAA records.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchAaaaRecordsParams {
    /// Exact record name (FQDN).
    pub name: Option<String>,

    /// Regular expression matched against the record name.
    pub name_regex: Option<String>,

    /// IPv6 address the record resolves to.
    pub ipv6addr: Option<String>,

    /// Zone the record belongs to.
    pub zone: Option<String>,

    /// DNS view.
    pub view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchAaaaRecordsTool;

impl ToolDefinition for SearchAaaaRecordsTool {
    const NAME: &'static str = "search_aaaa_records";
    const DESCRIPTION: &'static str =
        "Search DNS AAAA records by name, name regex, IPv6 address, zone or view.";
    const READ_ONLY: bool = true;
    type Params = SearchAaaaRecordsParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        if let Some(ip) = &params.ipv6addr {
            validate_ipv6("ipv6addr", ip)?;
        }
        let request = name_filter(WapiRequest::get(OBJECT), "name", params.name, params.name_regex)?
            .query_opt("ipv6addr", params.ipv6addr)
            .query_opt("zone", params.zone)
            .query_opt("view", params.view);
        params.options.apply(request)
    }
}

/// Parameters for creating an AAAA record.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateAaaaRecordParams {
    /// Record name (FQDN).
    pub name: String,

    /// IPv6 address.
    pub ipv6addr: String,

    /// DNS view.
    pub view: Option<String>,

    /// Record TTL in seconds.
    pub ttl: Option<u32>,

    /// Free-form comment.
    pub comment: Option<String>,
}

pub struct CreateAaaaRecordTool;

impl ToolDefinition for CreateAaaaRecordTool {
    const NAME: &'static str = "create_aaaa_record";
    const DESCRIPTION: &'static str = "Create a DNS AAAA record mapping a name to an IPv6 address.";
    const READ_ONLY: bool = false;
    type Params = CreateAaaaRecordParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        require_non_empty("name", &params.name)?;
        validate_ipv6("ipv6addr", &params.ipv6addr)?;

        let body = ObjectBody::new()
            .field("name", params.name)
            .field("ipv6addr", params.ipv6addr)
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
    use serde_json::json;

    #[test]
    fn test_search_by_ipv6() {
        let request = request_for::<SearchAaaaRecordsTool>(json!({"ipv6addr": "2001:db8::1", "view": "internal"}));
        assert_eq!(request.path, "record:aaaa");
        assert_eq!(query_value(&request, "ipv6addr"), Some("2001:db8::1"));
        assert_eq!(query_value(&request, "view"), Some("internal"));
    }

    #[test]
    fn test_create_rejects_ipv4() {
        assert!(rejected::<CreateAaaaRecordTool>(json!({
            "name": "v6.example.com",
            "ipv6addr": "192.0.2.1"
        })));
    }

    #[test]
    fn test_create_body_without_ttl() {
        let request = request_for::<CreateAaaaRecordTool>(json!({
            "name": "v6.example.com",
            "ipv6addr": "2001:db8::1"
        }));
        assert_eq!(
            request.body,
            Some(json!({"name": "v6.example.com", "ipv6addr": "2001:db8::1"}))
        );
    }
}
