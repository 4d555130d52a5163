//! DHCP tools: ranges, fixed addresses and leases.

pub mod fixed_address;
pub mod lease;
pub mod range;

pub use fixed_address::{CreateFixedAddressTool, SearchFixedAddressesTool};
pub use lease::SearchDhcpLeasesTool;
pub use range::{CreateDhcpRangeTool, SearchDhcpRangesTool};
