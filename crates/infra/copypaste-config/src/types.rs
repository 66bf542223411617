//! Configuration types for CopyPastePro.
//!
//! The root type is [`CopyPasteConfig`]. Every struct uses `#[serde(default)]`
//! so partial `copypaste.json` files work.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default Gemini model used for answers.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default secrets file, relative to the local config directory.
pub const DEFAULT_SECRETS_PATH: &str = ".copypaste/secrets.toml";

/// Root configuration loaded from `copypaste.json` files.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CopyPasteConfig {
    /// Optional JSON Schema URL for IDE autocomplete support.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// External service configuration.
    pub services: ServicesConfig,

    /// Model selection.
    pub models: ModelsConfig,

    /// Prompt sent to the model.
    pub prompt: PromptConfig,

    /// Phrase scrubber settings.
    pub scrubber: ScrubberConfig,

    /// Where the managed secrets file lives.
    pub secrets: SecretsConfig,

    /// Logging and diagnostics configuration.
    pub logging: LoggingConfig,
}

/// External service configurations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServicesConfig {
    /// Gemini API configuration.
    pub gemini: GeminiServiceConfig,
}

/// Gemini API service configuration. The API key is resolved separately and
/// never stored here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GeminiServiceConfig {
    /// Base URL for the Gemini API.
    pub base_url: String,
}

impl Default for GeminiServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEMINI_BASE_URL.into(),
        }
    }
}

/// Model selection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ModelsConfig {
    /// Model used by `answer` when none is given.
    pub default_model: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.into(),
        }
    }
}

/// Prompt construction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PromptConfig {
    /// Prompt template; `{text}` is replaced by the cleaned text.
    pub template: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            template: crate::prompt::DEFAULT_PROMPT_TEMPLATE.into(),
        }
    }
}

/// Phrase scrubber settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScrubberConfig {
    /// Phrase to remove instead of the built-in integrity notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,
}

/// Managed secrets file location.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SecretsConfig {
    /// Path of the TOML secrets file. Relative paths resolve against the local
    /// config directory.
    pub path: String,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_SECRETS_PATH.into(),
        }
    }
}

/// Logging and diagnostics configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Whether to enable JSON-formatted logs.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
        }
    }
}
