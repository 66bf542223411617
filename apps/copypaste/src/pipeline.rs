//! Clean-then-answer flow shared by the CLI and the web form.

use anyhow::{Context, Result};
use copypaste_config::{CopyPasteConfig, render_prompt};
use gemini_async::{
    Client, GeminiConfig, GeminiError, config::Config, types::GenerateContentRequest,
};
use phrase_scrubber::{INJECTED_INTEGRITY_NOTICE, PhraseScrubber, ScrubReport};
use secrecy::SecretString;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Please paste some text first.")]
    EmptyInput,

    #[error("Nothing left to ask after cleaning.")]
    NothingLeft,

    #[error(transparent)]
    Gemini(#[from] GeminiError),
}

/// Scrubber for the configured phrase, or the built-in integrity notice.
pub fn build_scrubber(cfg: &CopyPasteConfig) -> Result<PhraseScrubber> {
    let phrase = cfg
        .scrubber
        .phrase
        .as_deref()
        .unwrap_or(INJECTED_INTEGRITY_NOTICE);
    PhraseScrubber::new(phrase).context("Failed to compile scrubber phrase")
}

/// Reject blank input, then scrub.
pub fn clean_input(scrubber: &PhraseScrubber, raw: &str) -> Result<ScrubReport, PipelineError> {
    if raw.trim().is_empty() {
        return Err(PipelineError::EmptyInput);
    }
    let report = scrubber.scrub_with_report(raw);
    tracing::info!(removed = report.removed, "cleaned pasted text");
    Ok(report)
}

pub fn gemini_client(cfg: &CopyPasteConfig, key: &SecretString) -> Client<GeminiConfig> {
    Client::with_config(
        GeminiConfig::new()
            .with_api_base(cfg.services.gemini.base_url.clone())
            .with_api_key_secret(key.clone()),
    )
}

/// Render the prompt for `cleaned` and ask `model`.
pub async fn generate_answer<C: Config>(
    client: &Client<C>,
    model: &str,
    template: &str,
    cleaned: &str,
) -> Result<String, PipelineError> {
    if cleaned.trim().is_empty() {
        return Err(PipelineError::NothingLeft);
    }
    let req = GenerateContentRequest::from_prompt(render_prompt(template, cleaned));
    tracing::debug!(%model, "requesting answer");
    Ok(client.models().generate_text(model, &req).await?)
}
