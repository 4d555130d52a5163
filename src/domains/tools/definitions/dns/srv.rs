//! SRV record tools (`record:srv`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{ObjectBody, SearchOptions, require_non_empty};

const OBJECT: &str = "record:srv";

/// Parameters for searching SRV records.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchSrvRecordsParams {
    /// Service name, e.g. "_ldap._tcp.example.com".
    pub name: Option<String>,

    /// Target host name.
    pub target: Option<String>,

    /// Zone the record belongs to.
    pub zone: Option<String>,

    /// DNS view.
    pub view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchSrvRecordsTool;

impl ToolDefinition for SearchSrvRecordsTool {
    const NAME: &'static str = "search_srv_records";
    const DESCRIPTION: &'static str =
        "Search DNS SRV records by service name, target host, zone or view.";
    const READ_ONLY: bool = true;
    type Params = SearchSrvRecordsParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        let request = WapiRequest::get(OBJECT)
            .query_opt("name", params.name)
            .query_opt("target", params.target)
            .query_opt("zone", params.zone)
            .query_opt("view", params.view);
        params.options.apply(request)
    }
}

/// Parameters for creating an SRV record.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateSrvRecordParams {
    /// Service name, e.g. "_sip._udp.example.com".
    pub name: String,

    /// Target host providing the service.
    pub target: String,

    /// Service port.
    pub port: u16,

    /// Priority; lower values are preferred.
    pub priority: u16,

    /// Relative weight among records with the same priority.
    pub weight: u16,

    /// DNS view.
    pub view: Option<String>,

    /// Record TTL in seconds.
    pub ttl: Option<u32>,

    /// Free-form comment.
    pub comment: Option<String>,
}

pub struct CreateSrvRecordTool;

impl ToolDefinition for CreateSrvRecordTool {
    const NAME: &'static str = "create_srv_record";
    const DESCRIPTION: &'static str =
        "Create a DNS SRV record advertising a service target with port, priority and weight.";
    const READ_ONLY: bool = false;
    type Params = CreateSrvRecordParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        require_non_empty("name", &params.name)?;
        require_non_empty("target", &params.target)?;

        let body = ObjectBody::new()
            .field("name", params.name)
            .field("target", params.target)
            .field("port", params.port)
            .field("priority", params.priority)
            .field("weight", params.weight)
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
    use crate::domains::tools::testing::{rejected, request_for};
    use serde_json::json;

    #[test]
    fn test_create_body() {
        let request = request_for::<CreateSrvRecordTool>(json!({
            "name": "_ldap._tcp.example.com",
            "target": "dc1.example.com",
            "port": 389,
            "priority": 0,
            "weight": 100
        }));
        let body = request.body.unwrap();
        assert_eq!(body["port"], 389);
        assert_eq!(body["priority"], 0);
        assert_eq!(body["weight"], 100);
        assert_eq!(body["target"], "dc1.example.com");
    }

    #[test]
    fn test_create_requires_port() {
        assert!(rejected::<CreateSrvRecordTool>(json!({
            "name": "_ldap._tcp.example.com",
            "target": "dc1.example.com",
            "priority": 0,
            "weight": 100
        })));
    }
}
