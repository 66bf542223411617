pub mod answer;
pub mod clean;
pub mod config;
pub mod models;
pub mod serve;

use anyhow::Result;
use copypaste_config::{CredentialContext, KeyPrompt, LoadedCopyPasteConfig, ResolvedCredential};

/// Resolve the Gemini key for this run or fail with remediation help.
pub(crate) fn require_key(
    loaded: &LoadedCopyPasteConfig,
    prompt: &mut dyn KeyPrompt,
) -> Result<ResolvedCredential> {
    let mut credentials = CredentialContext::new(&loaded.paths.secrets);
    match credentials.resolve(prompt)? {
        Some(cred) => {
            tracing::info!(source = %cred.source, "using Gemini API key");
            Ok(cred)
        }
        None => anyhow::bail!("{}", copypaste_config::MISSING_KEY_HELP),
    }
}
