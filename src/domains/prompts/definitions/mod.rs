//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with its metadata and template.
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod audit_dns_zone;
mod provision_host;
mod troubleshoot_dhcp;

pub use audit_dns_zone::AuditDnsZonePrompt;
pub use provision_host::ProvisionHostPrompt;
pub use troubleshoot_dhcp::TroubleshootDhcpPrompt;

use rmcp::model::PromptArgument;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;
}

fn argument(name: &str, description: &str, required: bool) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(required),
    }
}
