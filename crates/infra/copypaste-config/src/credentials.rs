//! Gemini API key resolution.
//!
//! A [`CredentialContext`] lives for one session (a CLI run or a web server
//! process) and walks an ordered chain of sources:
//!
//! 1. the managed secrets file (TOML)
//! 2. the `GEMINI_API_KEY` environment variable
//! 3. a key supplied with the current request ([`KeyPrompt::supplied_key`]),
//!    which replaces the session key
//! 4. the key cached earlier in the same session
//! 5. an interactive [`KeyPrompt`], whose answer is cached for the session
//!
//! Values are trimmed and empty values are skipped.

use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use std::path::{Path, PathBuf};

/// Name of the key in the secrets file and the environment.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Table holding `api_key` in the nested secrets layout.
const SECRETS_TABLE: &str = "GEMINI";

/// Shown when no key could be found.
pub const MISSING_KEY_HELP: &str = "No Gemini API key found. Provide one of:\n  \
    - GEMINI_API_KEY = \"...\" in the secrets file (.copypaste/secrets.toml)\n  \
    - the GEMINI_API_KEY environment variable\n  \
    - a key entered when prompted (kept for this session only)";

/// Where a resolved key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Managed secrets file.
    SecretsFile,
    /// Process environment.
    Environment,
    /// Supplied with the current request.
    Supplied,
    /// Session cache.
    Session,
    /// Interactive prompt.
    Prompt,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::SecretsFile => "secrets file",
            Self::Environment => "environment",
            Self::Supplied => "request",
            Self::Session => "session",
            Self::Prompt => "prompt",
        })
    }
}

/// A key plus its origin. `Debug` never shows the key.
#[derive(Debug, Clone)]
pub struct ResolvedCredential {
    /// The API key.
    pub key: SecretString,
    /// Where it came from.
    pub source: CredentialSource,
}

impl ResolvedCredential {
    /// Key text, for handing to an HTTP client.
    pub fn expose(&self) -> &str {
        self.key.expose_secret()
    }
}

/// Asks the user for a key when no other source has one.
pub trait KeyPrompt {
    /// A key handed over with the current request. It wins over the session
    /// cache and replaces it.
    fn supplied_key(&mut self) -> Option<String> {
        None
    }

    /// Returns the entered key, or `None` if the user declined. Only called
    /// when the session has no key.
    fn prompt_key(&mut self) -> Result<Option<String>>;
}

/// Never prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl KeyPrompt for NoPrompt {
    fn prompt_key(&mut self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// A key supplied out of band, such as a web form field. Never prompts.
#[derive(Default)]
pub struct SuppliedKey(Option<String>);

impl SuppliedKey {
    /// Wrap an optional supplied key.
    pub const fn new(key: Option<String>) -> Self {
        Self(key)
    }
}

impl KeyPrompt for SuppliedKey {
    fn supplied_key(&mut self) -> Option<String> {
        self.0.take()
    }

    fn prompt_key(&mut self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Session-scoped credential resolver.
#[derive(Debug)]
pub struct CredentialContext {
    secrets_path: PathBuf,
    env_var: String,
    session: Option<SecretString>,
}

impl CredentialContext {
    /// Create a context reading the secrets file at `secrets_path`.
    pub fn new(secrets_path: impl Into<PathBuf>) -> Self {
        Self {
            secrets_path: secrets_path.into(),
            env_var: GEMINI_API_KEY.into(),
            session: None,
        }
    }

    /// Read the key from a different environment variable.
    #[must_use]
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Path of the secrets file.
    pub fn secrets_path(&self) -> &Path {
        &self.secrets_path
    }

    /// Whether a session key is cached.
    pub const fn has_session_key(&self) -> bool {
        self.session.is_some()
    }

    /// Cache `key` for the rest of the session. Returns `false` for a blank key.
    pub fn provide_session_key(&mut self, key: &str) -> bool {
        match non_empty(key) {
            Some(k) => {
                self.session = Some(SecretString::from(k));
                true
            }
            None => false,
        }
    }

    /// Forget the session key.
    pub fn clear_session(&mut self) {
        self.session = None;
    }

    /// Walk the source chain. `Ok(None)` means no source had a key.
    pub fn resolve(&mut self, prompt: &mut dyn KeyPrompt) -> Result<Option<ResolvedCredential>> {
        if let Some(key) = read_secrets_file(&self.secrets_path) {
            return Ok(Some(resolved(key, CredentialSource::SecretsFile)));
        }

        if let Some(key) = std::env::var(&self.env_var).ok().as_deref().and_then(non_empty) {
            return Ok(Some(resolved(key, CredentialSource::Environment)));
        }

        if let Some(key) = prompt.supplied_key().as_deref().and_then(non_empty) {
            tracing::debug!("caching supplied Gemini API key for this session");
            self.session = Some(SecretString::from(key.clone()));
            return Ok(Some(resolved(key, CredentialSource::Supplied)));
        }

        if let Some(key) = &self.session {
            return Ok(Some(ResolvedCredential {
                key: key.clone(),
                source: CredentialSource::Session,
            }));
        }

        let Some(entered) = prompt.prompt_key()? else {
            return Ok(None);
        };
        let Some(key) = non_empty(&entered) else {
            return Ok(None);
        };
        tracing::debug!("caching prompted Gemini API key for this session");
        self.session = Some(SecretString::from(key.clone()));
        Ok(Some(resolved(key, CredentialSource::Prompt)))
    }

    /// [`Self::resolve`] without prompting.
    pub fn resolve_non_interactive(&mut self) -> Option<ResolvedCredential> {
        self.resolve(&mut NoPrompt).ok().flatten()
    }
}

fn resolved(key: String, source: CredentialSource) -> ResolvedCredential {
    tracing::debug!(%source, "resolved Gemini API key");
    ResolvedCredential {
        key: SecretString::from(key),
        source,
    }
}

fn non_empty(v: &str) -> Option<String> {
    let v = v.trim();
    (!v.is_empty()).then(|| v.to_string())
}

/// Look up the key in a TOML secrets file.
///
/// Accepts a top-level `GEMINI_API_KEY = "..."` or `[GEMINI] api_key = "..."`.
/// A missing file yields `None`; an unreadable or malformed file is logged and
/// skipped.
fn read_secrets_file(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), "could not read secrets file: {e}");
            return None;
        }
    };

    let table: toml::Table = match raw.parse() {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring malformed secrets file: {e}");
            return None;
        }
    };

    let top = table.get(GEMINI_API_KEY).and_then(toml::Value::as_str);
    let nested = || {
        table
            .get(SECRETS_TABLE)
            .and_then(toml::Value::as_table)
            .and_then(|t| t.get("api_key"))
            .and_then(toml::Value::as_str)
    };

    top.and_then(non_empty).or_else(|| nested().and_then(non_empty))
}
