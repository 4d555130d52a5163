//! Grid service restart (`grid` `restartservices` function).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::wapi::WapiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolDefinition;
use crate::domains::tools::definitions::common::{ObjectBody, validate_ref_type};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestartOption {
    /// Restart only services with pending changes.
    #[default]
    RestartIfNeeded,
    /// Restart unconditionally.
    ForceRestart,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceOption {
    #[default]
    All,
    Dns,
    Dhcp,
    Dhcpv4,
    Dhcpv6,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberOrder {
    #[default]
    Simultaneously,
    Sequentially,
}

impl RestartOption {
    fn as_str(self) -> &'static str {
        match self {
            RestartOption::RestartIfNeeded => "RESTART_IF_NEEDED",
            RestartOption::ForceRestart => "FORCE_RESTART",
        }
    }
}

impl ServiceOption {
    fn as_str(self) -> &'static str {
        match self {
            ServiceOption::All => "ALL",
            ServiceOption::Dns => "DNS",
            ServiceOption::Dhcp => "DHCP",
            ServiceOption::Dhcpv4 => "DHCPV4",
            ServiceOption::Dhcpv6 => "DHCPV6",
        }
    }
}

impl MemberOrder {
    fn as_str(self) -> &'static str {
        match self {
            MemberOrder::Simultaneously => "SIMULTANEOUSLY",
            MemberOrder::Sequentially => "SEQUENTIALLY",
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RestartGridServicesParams {
    /// `_ref` of the grid object (see get_grid_info).
    pub grid_ref: String,

    #[serde(default)]
    pub restart_option: RestartOption,

    #[serde(default)]
    pub service_option: ServiceOption,

    #[serde(default)]
    pub member_order: MemberOrder,
}

pub struct RestartGridServicesTool;

impl ToolDefinition for RestartGridServicesTool {
    const NAME: &'static str = "restart_grid_services";
    const DESCRIPTION: &'static str = "Restart DNS/DHCP services on the grid so pending configuration changes take effect. Defaults to restarting only services that need it.";
    const READ_ONLY: bool = false;
    type Params = RestartGridServicesParams;

    fn build_request(params: Self::Params) -> Result<WapiRequest, ToolError> {
        validate_ref_type("grid_ref", &params.grid_ref, "grid")?;

        let body = ObjectBody::new()
            .field("restart_option", params.restart_option.as_str())
            .field("service_option", params.service_option.as_str())
            .field("member_order", params.member_order.as_str())
            .build();

        Ok(WapiRequest::post(params.grid_ref)
            .function("restartservices")
            .body(body))
    }
}
