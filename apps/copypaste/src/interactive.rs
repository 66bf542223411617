//! Terminal prompts.

use anyhow::{Context, Result};
use colored::Colorize;
use copypaste_config::{KeyPrompt, MISSING_KEY_HELP};
use gemini_async::types::Model;
use std::io::IsTerminal;

/// Asks for the Gemini API key on the terminal with hidden input.
pub struct TerminalPrompt;

impl KeyPrompt for TerminalPrompt {
    fn prompt_key(&mut self) -> Result<Option<String>> {
        if !std::io::stdin().is_terminal() {
            return Ok(None);
        }
        eprintln!("{} {MISSING_KEY_HELP}", "KEY".yellow());
        let key = dialoguer::Password::new()
            .with_prompt("Gemini API key (empty to cancel)")
            .allow_empty_password(true)
            .interact()
            .context("Failed to read API key")?;
        Ok(Some(key))
    }
}

/// Let the user choose among `models`, preselecting `current`.
pub fn pick_model(models: &[Model], current: &str) -> Result<String> {
    if models.is_empty() {
        anyhow::bail!("No models available for this key");
    }
    let ids: Vec<&str> = models.iter().map(Model::id).collect();
    let default = ids.iter().position(|id| *id == current).unwrap_or(0);

    let picked = dialoguer::Select::new()
        .with_prompt("Model")
        .items(&ids)
        .default(default)
        .interact()
        .context("Failed to read model selection")?;

    ids.get(picked)
        .map(|id| (*id).to_string())
        .context("Selection out of range")
}
