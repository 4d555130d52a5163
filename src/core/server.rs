//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! Tools come from `ToolRegistry`; the rmcp ToolRouter used by the stdio
//! transport is built from the same registry, so adding a tool never
//! requires touching this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::wapi::{WapiApi, WapiClient};
use crate::domains::{
    prompts::{PromptError, PromptService},
    resources::{ResourceError, ResourceService},
    tools::{ToolError, ToolRegistry, build_tool_router},
};

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "Infoblox NIOS grid management over WAPI. \
Search tools (search_*) are read-only and accept max_results and return_fields. \
Create tools add DNS records, networks, DHCP ranges, fixed addresses and zones. \
Objects are identified by their _ref; use get_object, update_object and delete_object \
to read, change or remove any object. Use func:nextavailableip:<network> in address \
fields to allocate the next free IP. DHCP and DNS changes may need restart_grid_services. \
Read infoblox://docs/search-syntax for filter syntax and infoblox://schema/{object_type} \
for object fields.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Every tool, bound to the WAPI client.
    tools: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server that sends WAPI requests through `client`.
    pub fn new(config: Config, client: Arc<dyn WapiApi>) -> Self {
        let config = Arc::new(config);

        let tools = Arc::new(ToolRegistry::new(client.clone()));
        let resource_service = Arc::new(ResourceService::new(
            config.infoblox.clone(),
            client,
            tools.tools(),
        ));
        let prompt_service = Arc::new(PromptService::new(config.prompts.clone()));

        info!(
            "Registered {} tools against {}",
            tools.entries().len(),
            tools.client().base_url()
        );

        Self {
            tool_router: build_tool_router::<Self>(&tools),
            config,
            tools,
            resource_service,
            prompt_service,
        }
    }

    /// Create a server with a real WAPI client built from the configuration.
    pub fn from_config(config: Config) -> super::error::Result<Self> {
        let client = WapiClient::new(&config.infoblox)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tools
            .tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "annotations": t.annotations,
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        self.tools.call_tool(name, arguments).await
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(
        &self,
        uri: &str,
    ) -> Result<ReadResourceResult, ResourceError> {
        self.resource_service.read_resource(uri).await
    }

    /// List all available resource templates (for HTTP transport).
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        let templates = self.resource_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompt_service.list_prompts().await
    }

    /// Get a prompt by name (for HTTP transport).
    ///
    /// Non-string argument values are ignored.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> Result<GetPromptResult, PromptError> {
        let args = arguments.and_then(|v| match v {
            serde_json::Value::Object(map) => Some(string_arguments(map)),
            _ => None,
        });
        self.prompt_service.get_prompt(name, args).await
    }
}

fn string_arguments(map: JsonObject) -> HashMap<String, String> {
    map.into_iter()
        .filter_map(|(k, v)| match v {
            serde_json::Value::String(s) => Some((k, s)),
            _ => None,
        })
        .collect()
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| match e {
                ResourceError::NotFound(_) | ResourceError::InvalidUri(_) => {
                    McpError::resource_not_found(e.to_string(), None)
                }
                _ => McpError::internal_error(e.to_string(), None),
            })
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.map(string_arguments);
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{MockWapi, result_text};
    use serde_json::json;

    fn test_server(mock: Arc<MockWapi>) -> McpServer {
        let mut config = Config::default();
        config.infoblox.host = "gm.example.com".to_string();
        config.infoblox.username = "admin".to_string();
        config.infoblox.password = "s3cret-pass".to_string();
        McpServer::new(config, mock)
    }

    #[test]
    fn test_server_info() {
        let server = test_server(MockWapi::ok(json!([])));
        let info = server.get_info();
        assert!(info.instructions.unwrap().contains("_ref"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert_eq!(server.name(), "infoblox-mcp-server");
    }

    #[test]
    fn test_router_and_http_listing_agree() {
        let server = test_server(MockWapi::ok(json!([])));
        let listed = server.list_tools();
        assert_eq!(listed.len(), server.tool_router.list_all().len());
        assert!(listed.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[tokio::test]
    async fn test_call_tool_goes_to_client() {
        let mock = MockWapi::ok(json!([{"_ref": "network/ZG5z:10.0.0.0/24/default"}]));
        let server = test_server(mock.clone());
        let result = server
            .call_tool("search_networks", json!({"network": "10.0.0.0/24"}))
            .await
            .unwrap();
        assert!(result_text(&result).contains("10.0.0.0/24"));
        assert_eq!(mock.requests()[0].path, "network");
    }

    #[tokio::test]
    async fn test_get_prompt_ignores_non_string_arguments() {
        let server = test_server(MockWapi::ok(json!([])));
        let result = server
            .get_prompt("audit_dns_zone", Some(json!({"zone": "example.com", "view": 7})))
            .await
            .unwrap();
        assert_eq!(result.messages.len(), 1);

        let missing = server
            .get_prompt("audit_dns_zone", Some(json!({"zone": 7})))
            .await;
        assert!(matches!(missing, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_resources_listed() {
        let server = test_server(MockWapi::ok(json!([])));
        assert_eq!(server.list_resources().await.len(), 3);
        assert_eq!(server.list_resource_templates().await.len(), 1);
        assert!(server.read_resource("infoblox://server/connection").await.is_ok());
    }
}
