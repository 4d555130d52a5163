//! TXT record tools (`record:txt`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, name_filter, require_non_empty,
};

const OBJECT: &str = "record:txt";

/// Parameters for searching TXT records.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchTxtRecordsParams {
    /// Exact record name (FQDN).
    pub name: Option<String>,

    /// Regular expression matched against the record name.
    pub name_regex: Option<String>,

    /// Exact record text.
    pub text: Option<String>,

    /// Zone the record belongs to.
    pub zone: Option<String>,

    /// DNS view.
    pub view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchTxtRecordsTool;

impl ToolDefinition for SearchTxtRecordsTool {
    const NAME: &'static str = "search_txt_records";
    const DESCRIPTION: &'static str =
        "Search DNS TXT records by name, name regex, text, zone or view.";
    const READ_ONLY: bool = true;
    type Params = SearchTxtRecordsParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        let request = name_filter(WapiRequest::get(OBJECT), "name", params.name, params.name_regex)?
            .query_opt("text", params.text)
            .query_opt("zone", params.zone)
            .query_opt("view", params.view);
        params.options.apply(request)
    }
}

/// Parameters for creating a TXT record.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateTxtRecordParams {
    /// Record name (FQDN).
    pub name: String,

    /// Record text, e.g. "v=spf1 include:_spf.example.com ~all".
    pub text: String,

    /// DNS view.
    pub view: Option<String>,

    /// Record TTL in seconds.
    pub ttl: Option<u32>,

    /// Free-form comment.
    pub comment: Option<String>,
}

pub struct CreateTxtRecordTool;

impl ToolDefinition for CreateTxtRecordTool {
    const NAME: &'static str = "create_txt_record";
    const DESCRIPTION: &'static str = "Create a DNS TXT record (SPF, DKIM, domain verification tokens, ...).";
    const READ_ONLY: bool = false;
    type Params = CreateTxtRecordParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        require_non_empty("name", &params.name)?;
        require_non_empty("text", &params.text)?;

        let body = ObjectBody::new()
            .field("name", params.name)
            .field("text", params.text)
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
    fn test_search_by_text() {
        let request = request_for::<SearchTxtRecordsTool>(json!({
            "zone": "example.com",
            "text": "v=spf1 -all"
        }));
        assert_eq!(query_value(&request, "text"), Some("v=spf1 -all"));
        assert_eq!(query_value(&request, "zone"), Some("example.com"));
    }

    #[test]
    fn test_create_requires_text() {
        assert!(rejected::<CreateTxtRecordTool>(json!({"name": "example.com", "text": ""})));
    }
}
