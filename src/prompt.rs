//! Interactive configuration for readygo.
//! Asks the operator for the values that usually differ between projects.

use crate::config::{ConfigOverrides, ProjectConfig};
use crate::error::{Error, Result};
use dialoguer::{Confirm, Input};

/// Source of interactive answers.
pub trait Prompter {
    /// Asks for free text; an empty answer keeps `default`.
    fn text(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: &str) -> Result<String> {
        Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.trim().to_string())
    }
}

/// Collects overrides for `config` from the operator.
///
/// Empty text answers keep the current value, except for the author which is
/// optional and may stay empty.
pub fn prompt_for_config(prompter: &dyn Prompter, config: &ProjectConfig) -> Result<ConfigOverrides> {
    let module_name = prompter.text("Module name", &config.module_name)?;
    let description = prompter.text("Project description", &config.description)?;
    let author = prompter.text("Author name (optional)", &config.author)?;
    let sample_api_name = prompter.text("Sample API entity name", &config.sample_api_name)?;
    let with_redis = prompter.confirm("Include Redis?", config.with_redis)?;
    let with_kafka = prompter.confirm("Include Kafka?", config.with_kafka)?;
    let skip_git = prompter.confirm("Skip git initialization?", config.skip_git)?;

    Ok(ConfigOverrides {
        module_name: non_empty(module_name),
        description: non_empty(description),
        author: Some(author.trim().to_string()),
        sample_api_name: non_empty(sample_api_name),
        with_redis: Some(with_redis),
        with_kafka: Some(with_kafka),
        skip_git: Some(skip_git),
        ..Default::default()
    })
}
