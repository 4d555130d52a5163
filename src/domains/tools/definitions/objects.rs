//! Generic object operations addressed by `_ref`.
//!
//! Every WAPI object can be read, updated and deleted through its reference
//! alone, so these three tools cover updates and deletions for all object
//! types instead of one pair per type.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::validate_ref;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetObjectParams {
    /// Object reference as returned in `_ref`.
    #[serde(rename = "ref")]
    pub reference: String,

    /// Additional fields to return.
    #[serde(default)]
    pub return_fields: Option<Vec<String>>,
}

pub struct GetObjectTool;

impl ToolDefinition for GetObjectTool {
    const NAME: &'static str = "get_object";
    const DESCRIPTION: &'static str = "Read any object by its _ref, optionally with extra return fields.";
    const READ_ONLY: bool = true;
    type Params = GetObjectParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        validate_ref("ref", &params.reference)?;
        Ok(WapiRequest::get(params.reference).return_fields(params.return_fields.as_deref()))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateObjectParams {
    /// Object reference as returned in `_ref`.
    #[serde(rename = "ref")]
    pub reference: String,

    /// Fields to change, e.g. {"comment": "decommissioned", "ttl": 300, "use_ttl": true}.
    pub fields: Map<String, Value>,
}

pub struct UpdateObjectTool;

impl ToolDefinition for UpdateObjectTool {
    const NAME: &'static str = "update_object";
    const DESCRIPTION: &'static str = "Update fields of any object by its _ref. Only the given fields change; the response is the object's (possibly new) _ref.";
    const READ_ONLY: bool = false;
    type Params = UpdateObjectParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        validate_ref("ref", &params.reference)?;
        if params.fields.is_empty() {
            return Err(ToolError::invalid_arguments("fields must not be empty"));
        }
        if params.fields.contains_key("_ref") {
            return Err(ToolError::invalid_arguments("_ref cannot be updated"));
        }
        Ok(WapiRequest::put(params.reference).body(Value::Object(params.fields)))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteObjectParams {
    /// Object reference as returned in `_ref`.
    #[serde(rename = "ref")]
    pub reference: String,
}

pub struct DeleteObjectTool;

impl ToolDefinition for DeleteObjectTool {
    const NAME: &'static str = "delete_object";
    const DESCRIPTION: &'static str = "Permanently delete any object by its _ref. Deleting a zone or network also removes what it contains.";
    const READ_ONLY: bool = false;
    const DESTRUCTIVE: bool = true;
    type Params = DeleteObjectParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        validate_ref("ref", &params.reference)?;
        Ok(WapiRequest::delete(params.reference))
    }
}
