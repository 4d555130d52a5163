//! Tool definitions, grouped by WAPI object family.

pub mod common;
pub mod dhcp;
pub mod dns;
pub mod grid;
pub mod ipam;
pub mod objects;
pub mod zones;

pub use objects::{DeleteObjectTool, GetObjectTool, UpdateObjectTool};
