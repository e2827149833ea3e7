//! Prompt provider that answers from a predefined table instead of the terminal.
//!
//! Useful for automation, testing, or CI environments.

use super::interface::*;
use crate::error::Result;
use std::collections::HashMap;

/// Automatic prompt provider that gives predefined responses
#[derive(Debug)]
pub struct AutomaticPrompter {
    text_responses: HashMap<String, String>,
    confirmation_responses: HashMap<String, bool>,
    default_text: String,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self {
            text_responses: HashMap::new(),
            confirmation_responses: HashMap::new(),
            default_text: String::new(),
        }
    }

    /// Add a predefined text response for a specific prompt
    pub fn with_text_response(mut self, prompt: &str, response: &str) -> Self {
        self.text_responses.insert(prompt.to_string(), response.to_string());
        self
    }

    /// Add a predefined confirmation response for a specific prompt
    pub fn with_confirmation_response(mut self, prompt: &str, response: bool) -> Self {
        self.confirmation_responses.insert(prompt.to_string(), response);
        self
    }

    /// Text returned for prompts without a configured response or default
    pub fn with_default_text(mut self, default_text: &str) -> Self {
        self.default_text = default_text.to_string();
        self
    }
}

impl Default for AutomaticPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let response = self
            .text_responses
            .get(&config.prompt)
            .cloned()
            .or_else(|| config.default.clone())
            .unwrap_or_else(|| self.default_text.clone());

        log::debug!("Auto-answering text prompt '{}' with: '{}'", config.prompt, response);
        Ok(response)
    }
}

impl ConfirmationPrompter for AutomaticPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let response = self
            .confirmation_responses
            .get(&config.prompt)
            .copied()
            .unwrap_or(config.default);

        log::debug!("Auto-answering confirmation '{}' with: {}", config.prompt, response);
        Ok(response)
    }
}
