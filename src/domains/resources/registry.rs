//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, ResourceTemplate};

use super::definitions::{
    ConnectionResource, ResourceDefinition, SchemaTemplate, SearchSyntaxResource,
    ToolCatalogResource,
};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<ConnectionResource>(),
        build_resource::<ToolCatalogResource>(),
        build_resource::<SearchSyntaxResource>(),
    ]
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![SchemaTemplate::template()]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        ConnectionResource::URI,
        ToolCatalogResource::URI,
        SearchSyntaxResource::URI,
    ]
}
