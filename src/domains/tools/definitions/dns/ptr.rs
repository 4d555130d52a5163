//! PTR record tools (`record:ptr`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, require_non_empty, validate_ipv4, validate_ipv6,
};

const OBJECT: &str = "record:ptr";

/// Parameters for searching PTR records.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchPtrRecordsParams {
    /// Domain name the pointer resolves to.
    pub ptrdname: Option<String>,

    /// IPv4 address of the reverse mapping.
    pub ipv4addr: Option<String>,

    /// IPv6 address of the reverse mapping.
    pub ipv6addr: Option<String>,

    /// Reverse zone the record belongs to, e.g. "2.0.192.in-addr.arpa".
    pub zone: Option<String>,

    /// DNS view.
    pub view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchPtrRecordsTool;

impl ToolDefinition for SearchPtrRecordsTool {
    const NAME: &'static str = "search_ptr_records";
    const DESCRIPTION: &'static str =
        "Search DNS PTR (reverse) records by target name, IP address, zone or view.";
    const READ_ONLY: bool = true;
    type Params = SearchPtrRecordsParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        if let Some(ip) = &params.ipv4addr {
            validate_ipv4("ipv4addr", ip)?;
        }
        if let Some(ip) = &params.ipv6addr {
            validate_ipv6("ipv6addr", ip)?;
        }
        let request = WapiRequest::get(OBJECT)
            .query_opt("ptrdname", params.ptrdname)
            .query_opt("ipv4addr", params.ipv4addr)
            .query_opt("ipv6addr", params.ipv6addr)
            .query_opt("zone", params.zone)
            .query_opt("view", params.view);
        params.options.apply(request)
    }
}

/// Parameters for creating a PTR record.
///
/// Exactly one of `ipv4addr`, `ipv6addr` or `name` identifies the reverse
/// mapping.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePtrRecordParams {
    /// Domain name the pointer resolves to.
    pub ptrdname: String,

    /// IPv4 address to map back to `ptrdname`.
    pub ipv4addr: Option<String>,

    /// IPv6 address to map back to `ptrdname`.
    pub ipv6addr: Option<String>,

    /// Reverse-zone record name, e.g. "10.2.0.192.in-addr.arpa".
    pub name: Option<String>,

    /// DNS view.
    pub view: Option<String>,

    /// Record TTL in seconds.
    pub ttl: Option<u32>,

    /// Free-form comment.
    pub comment: Option<String>,
}

pub struct CreatePtrRecordTool;

impl ToolDefinition for CreatePtrRecordTool {
    const NAME: &'static str = "create_ptr_record";
    const DESCRIPTION: &'static str = "Create a DNS PTR record. Provide ptrdname and exactly one of ipv4addr, ipv6addr or name (the in-addr.arpa/ip6.arpa record name).";
    const READ_ONLY: bool = false;
    type Params = CreatePtrRecordParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        require_non_empty("ptrdname", &params.ptrdname)?;

        let selectors = [&params.ipv4addr, &params.ipv6addr, &params.name]
            .iter()
            .filter(|v| v.is_some())
            .count();
        if selectors != 1 {
            return Err(ToolError::invalid_arguments(
                "Provide exactly one of ipv4addr, ipv6addr or name",
            ));
        }
        if let Some(ip) = &params.ipv4addr {
            validate_ipv4("ipv4addr", ip)?;
        }
        if let Some(ip) = &params.ipv6addr {
            validate_ipv6("ipv6addr", ip)?;
        }

        let body = ObjectBody::new()
            .field("ptrdname", params.ptrdname)
            .field_opt("ipv4addr", params.ipv4addr)
            .field_opt("ipv6addr", params.ipv6addr)
            .field_opt("name", params.name)
            .field_opt("view", params.view)
            .ttl(params.ttl)
            .field_opt("comment", params.comment)
            .build();

        Ok(WapiRequest::post(OBJECT).body(body))
    }
}
