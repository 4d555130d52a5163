//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is the single list of tools. The stdio router is built from
//! it and the HTTP transport dispatches through it, so both transports
//! always expose the same catalog.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::warn;

use crate::core::wapi::WapiApi;

use super::ToolError;
use super::definition::ToolEntry;
use super::definitions::{
    DeleteObjectTool, GetObjectTool, UpdateObjectTool, dhcp, dns, grid, ipam, zones,
};

/// Every tool exposed by the server, in listing order.
pub fn all_entries() -> Vec<ToolEntry> {
    vec![
        // DNS records
        ToolEntry::of::<dns::SearchARecordsTool>(),
        ToolEntry::of::<dns::CreateARecordTool>(),
        ToolEntry::of::<dns::SearchAaaaRecordsTool>(),
        ToolEntry::of::<dns::CreateAaaaRecordTool>(),
        ToolEntry::of::<dns::SearchCnameRecordsTool>(),
        ToolEntry::of::<dns::CreateCnameRecordTool>(),
        ToolEntry::of::<dns::SearchPtrRecordsTool>(),
        ToolEntry::of::<dns::CreatePtrRecordTool>(),
        ToolEntry::of::<dns::SearchMxRecordsTool>(),
        ToolEntry::of::<dns::CreateMxRecordTool>(),
        ToolEntry::of::<dns::SearchTxtRecordsTool>(),
        ToolEntry::of::<dns::CreateTxtRecordTool>(),
        ToolEntry::of::<dns::SearchSrvRecordsTool>(),
        ToolEntry::of::<dns::CreateSrvRecordTool>(),
        ToolEntry::of::<dns::SearchHostRecordsTool>(),
        ToolEntry::of::<dns::CreateHostRecordTool>(),
        // IPAM
        ToolEntry::of::<ipam::SearchNetworksTool>(),
        ToolEntry::of::<ipam::CreateNetworkTool>(),
        ToolEntry::of::<ipam::SearchNetworkContainersTool>(),
        ToolEntry::of::<ipam::SearchNetworkViewsTool>(),
        ToolEntry::of::<ipam::SearchIpAddressesTool>(),
        ToolEntry::of::<ipam::NextAvailableIpTool>(),
        ToolEntry::of::<ipam::NextAvailableNetworkTool>(),
        // DHCP
        ToolEntry::of::<dhcp::SearchDhcpRangesTool>(),
        ToolEntry::of::<dhcp::CreateDhcpRangeTool>(),
        ToolEntry::of::<dhcp::SearchFixedAddressesTool>(),
        ToolEntry::of::<dhcp::CreateFixedAddressTool>(),
        ToolEntry::of::<dhcp::SearchDhcpLeasesTool>(),
        // Zones and views
        ToolEntry::of::<zones::SearchAuthZonesTool>(),
        ToolEntry::of::<zones::CreateAuthZoneTool>(),
        ToolEntry::of::<zones::SearchForwardZonesTool>(),
        ToolEntry::of::<zones::CreateForwardZoneTool>(),
        ToolEntry::of::<zones::SearchDnsViewsTool>(),
        // Grid
        ToolEntry::of::<grid::GetGridInfoTool>(),
        ToolEntry::of::<grid::SearchGridMembersTool>(),
        ToolEntry::of::<grid::RestartGridServicesTool>(),
        ToolEntry::of::<grid::GetWapiSchemaTool>(),
        ToolEntry::of::<grid::GlobalSearchTool>(),
        // Any object by _ref
        ToolEntry::of::<GetObjectTool>(),
        ToolEntry::of::<UpdateObjectTool>(),
        ToolEntry::of::<DeleteObjectTool>(),
    ]
}

/// Tool registry - holds every tool and the client they call.
pub struct ToolRegistry {
    client: Arc<dyn WapiApi>,
    entries: Vec<ToolEntry>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a registry with every tool bound to `client`.
    pub fn new(client: Arc<dyn WapiApi>) -> Self {
        let entries = all_entries();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.name().to_string(), i))
            .collect();
        Self {
            client,
            entries,
            index,
        }
    }

    /// Client shared by all tools.
    pub fn client(&self) -> Arc<dyn WapiApi> {
        self.client.clone()
    }

    /// Registered entries, in listing order.
    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.entries.iter().map(ToolEntry::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|entry| entry.tool.clone()).collect()
    }

    /// Dispatch a tool call by name.
    ///
    /// Arguments must be a JSON object (or null for tools without required
    /// parameters).
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        let Some(&i) = self.index.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => Default::default(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be an object, got {}",
                    other
                )));
            }
        };

        self.entries[i].call(arguments, self.client.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{MockWapi, result_text};
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(MockWapi::ok(json!([])));
        let names = registry.tool_names();
        assert_eq!(names.len(), 41);
        for expected in [
            "search_a_records",
            "create_host_record",
            "search_networks",
            "get_next_available_ip",
            "create_dhcp_range",
            "search_dhcp_leases",
            "create_auth_zone",
            "restart_grid_services",
            "global_search",
            "update_object",
            "delete_object",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let registry = ToolRegistry::new(MockWapi::ok(json!([])));
        let names = registry.tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_every_tool_has_object_schema() {
        for tool in ToolRegistry::new(MockWapi::ok(json!([]))).tools() {
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&json!("object")),
                "{} schema is not an object",
                tool.name
            );
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_only_delete_is_destructive() {
        let destructive: Vec<_> = ToolRegistry::new(MockWapi::ok(json!([])))
            .tools()
            .into_iter()
            .filter(|t| t.annotations.as_ref().and_then(|a| a.destructive_hint) == Some(true))
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(destructive, vec!["delete_object".to_string()]);
    }

    #[tokio::test]
    async fn test_call_dispatches_to_client() {
        let mock = MockWapi::ok(json!([{"_ref": "view/ZG5z:default/true", "name": "default"}]));
        let registry = ToolRegistry::new(mock.clone());

        let result = registry
            .call_tool("search_dns_views", json!({"name": "default"}))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).contains("\"name\": \"default\""));
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "view");
    }

    #[tokio::test]
    async fn test_call_null_arguments() {
        let mock = MockWapi::ok(json!([]));
        let registry = ToolRegistry::new(mock.clone());
        let result = registry.call_tool("get_grid_info", Value::Null).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(mock.requests()[0].path, "grid");
    }

    #[tokio::test]
    async fn test_call_unknown() {
        let registry = ToolRegistry::new(MockWapi::ok(json!([])));
        let result = registry.call_tool("unknown", json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_call_rejects_non_object_arguments() {
        let registry = ToolRegistry::new(MockWapi::ok(json!([])));
        let result = registry.call_tool("get_grid_info", json!([1, 2])).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_wapi_failure_is_error_result() {
        let mock = MockWapi::failing(400, r#"{"Error": "AdmConProtoError: Unknown argument/field: 'bogus'"}"#);
        let registry = ToolRegistry::new(mock);
        let result = registry
            .call_tool("search_networks", json!({"network": "10.0.0.0/24"}))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Error: "));
    }
}
