//! Configuration and credentials for the CopyPastePro shell.
//!
//! This crate provides:
//! - [`CopyPasteConfig`]: The root configuration type with namespaced sub-configs
//! - [`load_merged`]: Two-layer config loading (global + local) with env overrides
//! - [`schema`]: JSON Schema generation for IDE autocomplete
//! - [`validation`]: Advisory validation that produces warnings
//! - [`credentials`]: Ordered Gemini API key resolution with a per-session cache
//!
//! # Configuration Precedence (lowest to highest)
//! 1. Default values
//! 2. Global config (`~/.config/copypaste/copypaste.json`)
//! 3. Local config (`./copypaste.json`)
//! 4. Environment variables
//!
//! # Example
//! ```no_run
//! use copypaste_config::load_merged;
//! use std::path::Path;
//!
//! let loaded = load_merged(Path::new(".")).unwrap();
//! println!("Default model: {}", loaded.config.models.default_model);
//!
//! for warning in &loaded.warnings {
//!     eprintln!("Warning: {}", warning);
//! }
//! ```
//!
//! # Environment Variables
//! - `GEMINI_BASE_URL`: Override Gemini API base URL
//! - `GEMINI_API_KEY`: Gemini API key (read by [`credentials`], never stored in config)
//! - `COPYPASTE_MODEL`: Override default model
//! - `COPYPASTE_SECRETS_PATH`: Override the secrets file location
//! - `COPYPASTE_LOG_LEVEL`: Override log level
//! - `COPYPASTE_LOG_JSON`: Enable JSON logging ("true" or "1")

pub mod credentials;
pub mod loader;
pub mod merge;
pub mod prompt;
pub mod schema;
pub mod types;
pub mod validation;
pub mod writer;

pub use credentials::{
    CredentialContext, CredentialSource, KeyPrompt, MISSING_KEY_HELP, NoPrompt,
    ResolvedCredential, SuppliedKey,
};
pub use loader::{LoadedCopyPasteConfig, load_merged};
pub use prompt::{DEFAULT_PROMPT_TEMPLATE, render_prompt};
pub use schema::schema_json_pretty;
pub use types::CopyPasteConfig;
