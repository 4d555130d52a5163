//! Infoblox MCP Server Library
//!
//! Exposes an Infoblox NIOS grid, through its WAPI REST interface, as a
//! Model Context Protocol server: DNS records, IPAM, DHCP, zones and grid
//! operations as tools, plus documentation resources and workflow prompts.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the WAPI client, the server
//!   handler and the transports
//! - **domains**: MCP capabilities organized by bounded contexts
//!   - **tools**: one `ToolDefinition` per WAPI operation
//!   - **resources**: connection info, search syntax, tool catalog, schemas
//!   - **prompts**: templated workflows (host provisioning, zone audit, ...)
//!
//! # Example
//!
//! ```rust,no_run
//! use infoblox_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::from_config(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
