//! Tools domain module.
//!
//! Each tool maps its arguments to one WAPI call and returns the raw JSON
//! response.
//!
//! ## Architecture
//!
//! - `definition.rs` - `ToolDefinition` trait and the shared executor
//! - `definitions/` - Tool definitions grouped by object family
//! - `registry.rs` - The tool list and by-name dispatch (HTTP)
//! - `router.rs` - rmcp ToolRouter built from the registry (STDIO)
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Implement `ToolDefinition` in the matching `definitions/` group
//! 2. Re-export it from the group's `mod.rs`
//! 3. Add `ToolEntry::of::<YourTool>()` to `registry::all_entries`
//!
//! The router and both transports pick it up from the registry.

pub mod definition;
pub mod definitions;
mod error;
mod registry;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use definition::{ToolDefinition, ToolEntry};
pub use error::ToolError;
pub use registry::{ToolRegistry, all_entries};
pub use router::build_tool_router;
