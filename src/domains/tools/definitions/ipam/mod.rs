//! IPAM tools: networks, containers, network views and address usage.

pub mod address;
pub mod container;
pub mod network;
pub mod view;

pub use address::{NextAvailableIpTool, SearchIpAddressesTool};
pub use container::{NextAvailableNetworkTool, SearchNetworkContainersTool};
pub use network::{CreateNetworkTool, SearchNetworksTool};
pub use view::SearchNetworkViewsTool;
