//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and
//! content provider. The schema template is resolved against the grid at
//! read time.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod connection;
mod schema;
mod search_syntax;
mod tool_catalog;

pub use connection::ConnectionResource;
pub use schema::{SCHEMA_URI_PREFIX, SchemaTemplate};
pub use search_syntax::SearchSyntaxResource;
pub use tool_catalog::ToolCatalogResource;

use super::service::ResourceContent;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}
