//! Grid connection resource.

use serde_json::{Value, json};

use super::ResourceDefinition;
use crate::core::config::InfobloxConfig;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Connection settings in effect (dynamic, credentials omitted).
pub struct ConnectionResource;

impl ResourceDefinition for ConnectionResource {
    const URI: &'static str = "infoblox://server/connection";
    const NAME: &'static str = "Grid Connection";
    const DESCRIPTION: &'static str =
        "Grid host, WAPI version and base URL this server talks to";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Connection)
    }
}

impl ConnectionResource {
    /// Render the connection summary. The password is never included.
    pub fn render(config: &InfobloxConfig, base_url: &str) -> Value {
        json!({
            "server": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "host": config.host,
            "wapi_version": config.wapi_version,
            "base_url": base_url,
            "username": config.username,
            "verify_ssl": config.verify_ssl,
            "timeout_secs": config.timeout_secs,
        })
    }
}
