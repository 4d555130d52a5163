//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{
    AuditDnsZonePrompt, PromptDefinition, ProvisionHostPrompt, TroubleshootDhcpPrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate::new(
        P::NAME,
        Some(P::DESCRIPTION.to_string()),
        P::arguments(),
        P::template(),
    )
}

/// Get all registered prompts as PromptTemplates.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<ProvisionHostPrompt>(),
        build_template::<AuditDnsZonePrompt>(),
        build_template::<TroubleshootDhcpPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        ProvisionHostPrompt::NAME,
        AuditDnsZonePrompt::NAME,
        TroubleshootDhcpPrompt::NAME,
    ]
}
