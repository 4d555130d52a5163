//! MX record tools (`record:mx`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{ObjectBody, SearchOptions, require_non_empty};

const OBJECT: &str = "record:mx";

/// Parameters for searching MX records.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchMxRecordsParams {
    /// Mail domain name.
    pub name: Option<String>,

    /// Mail exchanger host name.
    pub mail_exchanger: Option<String>,

    /// Zone the record belongs to.
    pub zone: Option<String>,

    /// DNS view.
    pub view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchMxRecordsTool;

impl ToolDefinition for SearchMxRecordsTool {
    const NAME: &'static str = "search_mx_records";
    const DESCRIPTION: &'static str =
        "Search DNS MX records by mail domain, mail exchanger, zone or view.";
    const READ_ONLY: bool = true;
    type Params = SearchMxRecordsParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        let request = WapiRequest::get(OBJECT)
            .query_opt("name", params.name)
            .query_opt("mail_exchanger", params.mail_exchanger)
            .query_opt("zone", params.zone)
            .query_opt("view", params.view);
        params.options.apply(request)
    }
}

/// Parameters for creating an MX record.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateMxRecordParams {
    /// Mail domain name, e.g. "example.com".
    pub name: String,

    /// Mail exchanger host name.
    pub mail_exchanger: String,

    /// Preference value; lower values are tried first.
    pub preference: u16,

    /// DNS view.
    pub view: Option<String>,

    /// Record TTL in seconds.
    pub ttl: Option<u32>,

    /// Free-form comment.
    pub comment: Option<String>,
}

pub struct CreateMxRecordTool;

impl ToolDefinition for CreateMxRecordTool {
    const NAME: &'static str = "create_mx_record";
    const DESCRIPTION: &'static str =
        "Create a DNS MX record pointing a mail domain at a mail exchanger with a preference.";
    const READ_ONLY: bool = false;
    type Params = CreateMxRecordParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        require_non_empty("name", &params.name)?;
        require_non_empty("mail_exchanger", &params.mail_exchanger)?;

        let body = ObjectBody::new()
            .field("name", params.name)
            .field("mail_exchanger", params.mail_exchanger)
            .field("preference", params.preference)
            .field_opt("view", params.view)
            .ttl(params.ttl)
            .field_opt("comment", params.comment)
            .build();

        Ok(WapiRequest::post(OBJECT).body(body))
    }
}
