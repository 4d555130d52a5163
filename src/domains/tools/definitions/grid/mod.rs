//! Grid administration and WAPI introspection tools.

pub mod info;
pub mod restart;
pub mod schema;

pub use info::{GetGridInfoTool, SearchGridMembersTool};
pub use restart::RestartGridServicesTool;
pub use schema::{GetWapiSchemaTool, GlobalSearchTool};
