//! Prompt service implementation.
//!
//! The PromptService holds the prompt templates and renders them with the
//! caller's arguments. A missing or empty `view` argument falls back to the
//! configured default DNS view.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;
use crate::core::config::PromptsConfig;

/// Argument filled from configuration when the caller leaves it out.
const VIEW_ARGUMENT: &str = "view";

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Configuration for the prompts domain.
    config: PromptsConfig,

    /// Registered prompts, in listing order.
    prompts: Vec<PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with the given configuration.
    pub fn new(config: PromptsConfig) -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            config,
            prompts: Vec::new(),
        };

        for template in get_all_prompts() {
            service.register_prompt(template);
        }

        service
    }

    /// Register a prompt template, replacing one with the same name.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        debug!("Registering prompt: {}", template.name);
        self.prompts.retain(|p| p.name != template.name);
        self.prompts.push(template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .iter()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let mut arguments = arguments.unwrap_or_default();

        for required in template.required_arguments() {
            let present = arguments
                .get(required)
                .is_some_and(|v| !v.trim().is_empty());
            if !present {
                return Err(PromptError::missing_argument(required));
            }
        }

        let takes_view = template.arguments.iter().any(|a| a.name == VIEW_ARGUMENT);
        if takes_view {
            let view = arguments.entry(VIEW_ARGUMENT.to_string()).or_default();
            if view.trim().is_empty() {
                *view = self.config.default_view.clone();
            }
        }

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}
