//! DNS zone and view tools.

pub mod auth;
pub mod forward;
pub mod view;

pub use auth::{CreateAuthZoneTool, SearchAuthZonesTool};
pub use forward::{CreateForwardZoneTool, SearchForwardZonesTool};
pub use view::SearchDnsViewsTool;
