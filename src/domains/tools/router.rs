//! Tool Router - builds the rmcp ToolRouter from the registry.

use rmcp::handler::server::tool::ToolRouter;

use super::registry::ToolRegistry;

/// Build the tool router with every registered tool.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let client = registry.client();
    registry
        .entries()
        .iter()
        .fold(ToolRouter::new(), |router, entry| {
            router.with_route(entry.create_route(client.clone()))
        })
}
