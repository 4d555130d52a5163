//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Static and
//! dynamic resources are registered from `registry.rs`; schema template
//! reads are forwarded to the grid.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate, Tool};
use std::sync::Arc;
use tracing::{debug, info};

use super::definitions::{ConnectionResource, SchemaTemplate, ToolCatalogResource};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::InfobloxConfig;
use crate::core::wapi::{WapiApi, WapiRequest};

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Grid connection settings, for the connection resource.
    infoblox: InfobloxConfig,

    /// Client used to resolve schema templates.
    client: Arc<dyn WapiApi>,

    /// Tool metadata, for the tool catalog.
    tools: Vec<Tool>,

    /// Registered resources, in listing order.
    resources: Vec<ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Content computed at read time.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicResourceType {
    /// Grid connection summary.
    Connection,

    /// Markdown catalog of the registered tools.
    ToolCatalog,
}

impl ResourceService {
    /// Create a new ResourceService.
    pub fn new(infoblox: InfobloxConfig, client: Arc<dyn WapiApi>, tools: Vec<Tool>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            infoblox,
            client,
            tools,
            resources: Vec::new(),
            templates: get_all_resource_templates(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        let uri = entry.resource.raw.uri.clone();
        match self.resources.iter_mut().find(|e| e.resource.raw.uri == uri) {
            Some(existing) => *existing = entry,
            None => self.resources.push(entry),
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if let Some(object_type) = SchemaTemplate::object_type(uri)? {
            return self.read_schema(uri, object_type).await;
        }

        let entry = self
            .resources
            .iter()
            .find(|e| e.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, *dynamic_type)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    async fn read_schema(
        &self,
        uri: &str,
        object_type: &str,
    ) -> Result<ReadResourceResult, ResourceError> {
        info!("Fetching WAPI schema for {}", object_type);
        let schema = self.client.send(WapiRequest::schema(object_type)).await?;
        let text = serde_json::to_string_pretty(&schema)
            .map_err(|e| ResourceError::internal(e.to_string()))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::Connection => {
                let info = ConnectionResource::render(&self.infoblox, self.client.base_url());
                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
            DynamicResourceType::ToolCatalog => Ok(ResourceContents::text(
                ToolCatalogResource::render(&self.tools),
                uri,
            )),
        }
    }
}
