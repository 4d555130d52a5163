//! CNAME record tools (`record:cname`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, name_filter, require_non_empty,
};

const OBJECT: &str = "record:cname";

/// Parameters for searching CNAME records.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchCnameRecordsParams {
    /// Exact alias name (FQDN).
    pub name: Option<String>,

    /// Regular expression matched against the alias name.
    pub name_regex: Option<String>,

    /// Canonical name the alias points to.
    pub canonical: Option<String>,

    /// Zone the record belongs to.
    pub zone: Option<String>,

    /// DNS view.
    pub view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchCnameRecordsTool;

impl ToolDefinition for SearchCnameRecordsTool {
    const NAME: &'static str = "search_cname_records";
    const DESCRIPTION: &'static str =
        "Search DNS CNAME records by alias name, name regex, canonical target, zone or view.";
    const READ_ONLY: bool = true;
    type Params = SearchCnameRecordsParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        let request = name_filter(WapiRequest::get(OBJECT), "name", params.name, params.name_regex)?
            .query_opt("canonical", params.canonical)
            .query_opt("zone", params.zone)
            .query_opt("view", params.view);
        params.options.apply(request)
    }
}

/// Parameters for creating a CNAME record.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateCnameRecordParams {
    /// Alias name (FQDN).
    pub name: String,

    /// Canonical name the alias resolves to.
    pub canonical: String,

    /// DNS view.
    pub view: Option<String>,

    /// Record TTL in seconds.
    pub ttl: Option<u32>,

    /// Free-form comment.
    pub comment: Option<String>,
}

pub struct CreateCnameRecordTool;

impl ToolDefinition for CreateCnameRecordTool {
    const NAME: &'static str = "create_cname_record";
    const DESCRIPTION: &'static str = "Create a DNS CNAME record aliasing one name to a canonical name.";
    const READ_ONLY: bool = false;
    type Params = CreateCnameRecordParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        require_non_empty("name", &params.name)?;
        require_non_empty("canonical", &params.canonical)?;
        if params.name.eq_ignore_ascii_case(&params.canonical) {
            return Err(ToolError::invalid_arguments(
                "A CNAME record cannot point to itself",
            ));
        }

        let body = ObjectBody::new()
            .field("name", params.name)
            .field("canonical", params.canonical)
            .field_opt("view", params.view)
            .ttl(params.ttl)
            .field_opt("comment", params.comment)
            .build();

        Ok(WapiRequest::post(OBJECT).body(body))
    }
}
