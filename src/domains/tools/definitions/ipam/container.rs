//! Network container tools (`networkcontainer`).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{
    ObjectBody, SearchOptions, validate_cidr, validate_prefix_length, validate_ref_type,
};

const OBJECT: &str = "networkcontainer";

/// Maximum number of networks allocated in one call.
const MAX_NETWORKS_PER_CALL: u32 = 20;

/// Parameters for searching network containers.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchNetworkContainersParams {
    /// Container in CIDR notation, e.g. "10.0.0.0/8".
    pub network: Option<String>,

    /// Network view.
    pub network_view: Option<String>,

    #[serde(flatten)]
    pub options: SearchOptions,
}

pub struct SearchNetworkContainersTool;

impl ToolDefinition for SearchNetworkContainersTool {
    const NAME: &'static str = "search_network_containers";
    const DESCRIPTION: &'static str =
        "Search IPv4 network containers (parent blocks that hold networks) by CIDR or network view.";
    const READ_ONLY: bool = true;
    type Params = SearchNetworkContainersParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        if let Some(network) = &params.network {
            validate_cidr("network", network)?;
        }
        let request = WapiRequest::get(OBJECT)
            .query_opt("network", params.network)
            .query_opt("network_view", params.network_view);
        params.options.apply(request)
    }
}

/// Parameters for allocating networks from a container.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NextAvailableNetworkParams {
    /// `_ref` of the network container to allocate from.
    pub container_ref: String,

    /// Prefix length of the networks to allocate, e.g. 24.
    pub cidr: u8,

    /// Number of networks to return (1-20, default 1).
    #[serde(default = "default_num")]
    pub num: u32,

    /// Networks (CIDR) that must not be returned.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_num() -> u32 {
    1
}

pub struct NextAvailableNetworkTool;

impl ToolDefinition for NextAvailableNetworkTool {
    const NAME: &'static str = "get_next_available_network";
    const DESCRIPTION: &'static str = "Find the next free networks of a given prefix length inside a network container. Does not create them; pass a result to create_network.";
    const READ_ONLY: bool = true;
    type Params = NextAvailableNetworkParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        validate_ref_type("container_ref", &params.container_ref, OBJECT)?;
        validate_prefix_length("cidr", params.cidr)?;
        if params.num == 0 || params.num > MAX_NETWORKS_PER_CALL {
            return Err(ToolError::invalid_arguments(format!(
                "num must be between 1 and {}",
                MAX_NETWORKS_PER_CALL
            )));
        }
        for network in &params.exclude {
            validate_cidr("exclude", network)?;
        }

        let mut body = ObjectBody::new()
            .field("cidr", params.cidr)
            .field("num", params.num);
        if !params.exclude.is_empty() {
            body = body.field("exclude", params.exclude);
        }

        Ok(WapiRequest::post(params.container_ref)
            .function("next_available_network")
            .body(body.build()))
    }
}
