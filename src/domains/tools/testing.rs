//! Test helpers: a recording WAPI client and result accessors.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, RawContent};
use serde_json::Value;
use std::sync::{Arc, Mutex};

use super::definition::ToolDefinition;
use crate::core::wapi::{WapiApi, WapiError, WapiRequest, WapiResult};

enum Reply {
    Json(Value),
    Status(u16, String),
}

/// Records every request and answers with a canned reply.
pub struct MockWapi {
    requests: Mutex<Vec<WapiRequest>>,
    reply: Reply,
}

impl MockWapi {
    /// Answer every request with the given JSON.
    pub fn ok(value: Value) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Reply::Json(value),
        })
    }

    /// Answer every request with an HTTP error.
    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Reply::Status(status, body.to_string()),
        })
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<WapiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl WapiApi for MockWapi {
    async fn send(&self, request: WapiRequest) -> WapiResult<Value> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Status(status, body) => Err(WapiError::status(*status, body.clone())),
        }
    }

    fn base_url(&self) -> &str {
        "https://grid.test/wapi/v2.12/"
    }
}

/// Convert a JSON literal into tool arguments.
pub fn args(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("tool arguments must be an object, got {}", other),
    }
}

/// Text of the first content item.
pub fn result_text(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Build the request a tool would send for the given arguments.
pub fn request_for<T: ToolDefinition>(value: Value) -> WapiRequest {
    let params: T::Params = serde_json::from_value(value).expect("arguments should decode");
    T::build_request(params).expect("request should build")
}

/// Build a tool request that is expected to be rejected.
pub fn rejected<T: ToolDefinition>(value: Value) -> bool {
    match serde_json::from_value::<T::Params>(value) {
        Ok(params) => T::build_request(params).is_err(),
        Err(_) => true,
    }
}

/// Value of a query parameter, if set.
pub fn query_value<'a>(request: &'a WapiRequest, key: &str) -> Option<&'a str> {
    request
        .query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
