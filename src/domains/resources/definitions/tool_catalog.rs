//! Tool catalog resource, generated from the tool registry.

use std::fmt::Write;

use rmcp::model::Tool;

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

pub struct ToolCatalogResource;

impl ResourceDefinition for ToolCatalogResource {
    const URI: &'static str = "infoblox://docs/tools";
    const NAME: &'static str = "Tool Catalog";
    const DESCRIPTION: &'static str = "Every tool this server exposes, grouped by access";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ToolCatalog)
    }
}

impl ToolCatalogResource {
    /// Render the catalog as Markdown: read-only tools first, then tools
    /// that change the grid.
    pub fn render(tools: &[Tool]) -> String {
        let is_read_only = |tool: &Tool| {
            tool.annotations
                .as_ref()
                .and_then(|a| a.read_only_hint)
                .unwrap_or(false)
        };

        let mut out = String::from("# Infoblox WAPI Tools\n");
        for (heading, read_only) in [("Read-only", true), ("Changes the grid", false)] {
            let _ = write!(out, "\n## {}\n\n", heading);
            for tool in tools.iter().filter(|t| is_read_only(t) == read_only) {
                let _ = writeln!(
                    out,
                    "- `{}`: {}",
                    tool.name,
                    tool.description.as_deref().unwrap_or("")
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::all_entries;

    #[test]
    fn test_render_lists_every_tool() {
        let tools: Vec<Tool> = all_entries().into_iter().map(|e| e.tool).collect();
        let markdown = ToolCatalogResource::render(&tools);
        for tool in &tools {
            assert!(markdown.contains(&format!("`{}`", tool.name)));
        }
    }

    #[test]
    fn test_render_splits_by_access() {
        let tools: Vec<Tool> = all_entries().into_iter().map(|e| e.tool).collect();
        let markdown = ToolCatalogResource::render(&tools);
        let split = markdown.find("## Changes the grid").unwrap();
        assert!(markdown.find("`search_a_records`").unwrap() < split);
        assert!(markdown.find("`delete_object`").unwrap() > split);
    }
}
