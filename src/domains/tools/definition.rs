//! Tool definition trait and the shared execution path.
//!
//! Every tool maps validated parameters to exactly one `WapiRequest`. The
//! executor in this module handles the rest: argument decoding, sending the
//! request and turning the raw WAPI response into a `CallToolResult`.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, info, info_span, warn};

use super::error::ToolError;
use crate::core::wapi::{WapiApi, WapiRequest};

/// A single WAPI-backed tool.
pub trait ToolDefinition: 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Whether the tool only reads grid state.
    const READ_ONLY: bool;

    /// Whether the tool removes grid objects.
    const DESTRUCTIVE: bool = false;

    /// Input parameters, validated against the generated JSON schema.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Map parameters to the WAPI call.
    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<Self::Params>().into(),
            annotations: Some(ToolAnnotations {
                title: None,
                read_only_hint: Some(Self::READ_ONLY),
                destructive_hint: Some(Self::DESTRUCTIVE),
                idempotent_hint: Some(Self::READ_ONLY || Self::DESTRUCTIVE),
                open_world_hint: Some(true),
            }),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Boxed handler shared by the stdio router and the HTTP registry.
pub type ToolHandlerFn =
    fn(JsonObject, Arc<dyn WapiApi>) -> BoxFuture<'static, Result<CallToolResult, ToolError>>;

/// A registered tool: metadata plus its type-erased handler.
#[derive(Clone)]
pub struct ToolEntry {
    pub tool: Tool,
    handler: ToolHandlerFn,
}

impl ToolEntry {
    /// Register a tool definition.
    pub fn of<T: ToolDefinition>() -> Self {
        Self {
            tool: T::to_tool(),
            handler: handle::<T>,
        }
    }

    /// Tool name.
    pub fn name(&self) -> &str {
        &self.tool.name
    }

    /// Run the tool against the given client.
    pub fn call(
        &self,
        arguments: JsonObject,
        client: Arc<dyn WapiApi>,
    ) -> BoxFuture<'static, Result<CallToolResult, ToolError>> {
        (self.handler)(arguments, client)
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(&self, client: Arc<dyn WapiApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        let handler = self.handler;
        ToolRoute::new_dyn(self.tool.clone(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move { handler(args, client).await.map_err(Into::into) }.boxed()
        })
    }
}

fn handle<T: ToolDefinition>(
    arguments: JsonObject,
    client: Arc<dyn WapiApi>,
) -> BoxFuture<'static, Result<CallToolResult, ToolError>> {
    let span = info_span!("tool", name = T::NAME);
    execute::<T>(arguments, client).instrument(span).boxed()
}

/// Decode arguments, send the request and format the response.
///
/// Argument and validation problems are returned as `ToolError`; a failed
/// WAPI call is reported inside the result with `is_error` set.
pub async fn execute<T: ToolDefinition>(
    arguments: JsonObject,
    client: Arc<dyn WapiApi>,
) -> Result<CallToolResult, ToolError> {
    let params: T::Params = serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

    let request = T::build_request(params)?;
    info!("{} called: {}", T::NAME, request.describe());

    match client.send(request).await {
        Ok(response) => Ok(success_result(&response)),
        Err(e) => {
            warn!("{} failed: {}", T::NAME, e);
            Ok(error_result(&format!("Error: {}", e)))
        }
    }
}

/// Pretty-print the raw WAPI response as the tool output.
pub fn success_result(response: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{MockWapi, args, result_text};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct PingParams {
        name: String,
    }

    struct PingTool;

    impl ToolDefinition for PingTool {
        const NAME: &'static str = "ping";
        const DESCRIPTION: &'static str = "Look up a grid member by name";
        const READ_ONLY: bool = true;
        type Params = PingParams;

        fn build_request(params: PingParams) -> Result<WapiRequest, ToolError> {
            if params.name.is_empty() {
                return Err(ToolError::invalid_arguments("name must not be empty"));
            }
            Ok(WapiRequest::get("member").query("host_name", params.name))
        }
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = PingTool::to_tool();
        assert_eq!(tool.name, "ping");
        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.read_only_hint, Some(true));
        assert_eq!(annotations.destructive_hint, Some(false));
        assert!(tool.input_schema.get("properties").is_some());
    }

    #[tokio::test]
    async fn test_execute_success_returns_raw_json() {
        let mock = MockWapi::ok(json!([{"_ref": "member/b25l:gm.example.com", "host_name": "gm.example.com"}]));
        let result = execute::<PingTool>(args(json!({"name": "gm.example.com"})), mock.clone())
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        let text = result_text(&result);
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["host_name"], "gm.example.com");

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "member");
    }

    #[tokio::test]
    async fn test_execute_http_failure_is_error_result() {
        let mock = MockWapi::failing(401, "Authorization Required");
        let result = execute::<PingTool>(args(json!({"name": "gm"})), mock)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.starts_with("Error:"));
        assert!(text.contains("401"));
    }

    #[tokio::test]
    async fn test_execute_rejects_bad_arguments_without_request() {
        let mock = MockWapi::ok(json!([]));

        let err = execute::<PingTool>(args(json!({"name": 42})), mock.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        let err = execute::<PingTool>(args(json!({"name": ""})), mock.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_entry_dispatch() {
        let entry = ToolEntry::of::<PingTool>();
        assert_eq!(entry.name(), "ping");

        let mock = MockWapi::ok(json!([]));
        let result = entry
            .call(args(json!({"name": "gm"})), mock.clone())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(mock.requests().len(), 1);
    }
}
