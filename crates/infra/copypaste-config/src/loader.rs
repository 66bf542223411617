//! Configuration loader with two-layer merge and env overrides.
//!
//! The loading process:
//! 1. Read global config from `~/.config/copypaste/copypaste.json`
//! 2. Read local config from `./copypaste.json`
//! 3. Deep merge at JSON Value level (RFC 7396)
//! 4. Deserialize once into typed `CopyPasteConfig`
//! 5. Apply env var overrides (highest precedence)
//! 6. Run advisory validation

use crate::{merge::merge_patch, types::CopyPasteConfig, validation::AdvisoryWarning};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Filename for local config.
pub const LOCAL_FILE: &str = "copypaste.json";

/// Directory name under `config_dir` for global config.
pub const GLOBAL_DIR: &str = "copypaste";

/// Filename for global config.
pub const GLOBAL_FILE: &str = "copypaste.json";

/// Resolved paths for config files.
#[derive(Debug, Clone)]
pub struct CopyPasteConfigPaths {
    /// Path to local config (`./copypaste.json`).
    pub local: PathBuf,

    /// Path to global config (`~/.config/copypaste/copypaste.json`).
    pub global: PathBuf,

    /// Secrets file, resolved against the local directory.
    pub secrets: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct LoadedCopyPasteConfig {
    /// The loaded and merged configuration.
    pub config: CopyPasteConfig,

    /// Advisory warnings from validation.
    pub warnings: Vec<AdvisoryWarning>,

    /// Resolved config file paths.
    pub paths: CopyPasteConfigPaths,
}

/// Get the global config file path.
pub fn global_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config dir")?;
    Ok(base.join(GLOBAL_DIR).join(GLOBAL_FILE))
}

/// Get the local config file path for a given directory.
pub fn local_config_path(local_dir: &Path) -> PathBuf {
    local_dir.join(LOCAL_FILE)
}

/// Load and merge configuration from the global and local files.
///
/// # Precedence (lowest to highest)
/// 1. Default values
/// 2. Global config (`~/.config/copypaste/copypaste.json`)
/// 3. Local config (`./copypaste.json`)
/// 4. Environment variables
pub fn load_merged(local_dir: &Path) -> Result<LoadedCopyPasteConfig> {
    load_from(&global_config_path()?, local_dir)
}

/// [`load_merged`] with an explicit global config path.
pub fn load_from(global_path: &Path, local_dir: &Path) -> Result<LoadedCopyPasteConfig> {
    let local_path = local_config_path(local_dir);

    let global_v = read_json_object_or_empty(global_path)?;
    let local_v = read_json_object_or_empty(&local_path)?;
    let merged = merge_patch(global_v, local_v);

    let mut cfg: CopyPasteConfig =
        serde_json::from_value(merged).context("Failed to deserialize merged copypaste config")?;

    apply_env_overrides(&mut cfg);

    let warnings = crate::validation::validate(&cfg);
    for w in &warnings {
        tracing::debug!(code = w.code, path = w.path, "config warning: {}", w.message);
    }

    let secrets = resolve_relative(local_dir, &cfg.secrets.path);

    Ok(LoadedCopyPasteConfig {
        config: cfg,
        warnings,
        paths: CopyPasteConfigPaths {
            local: local_path,
            global: global_path.to_path_buf(),
            secrets,
        },
    })
}

fn apply_env_overrides(cfg: &mut CopyPasteConfig) {
    if let Some(v) = env_trimmed("GEMINI_BASE_URL") {
        cfg.services.gemini.base_url = v;
    }
    if let Some(v) = env_trimmed("COPYPASTE_MODEL") {
        cfg.models.default_model = v;
    }
    if let Some(v) = env_trimmed("COPYPASTE_SECRETS_PATH") {
        cfg.secrets.path = v;
    }
    if let Some(v) = env_trimmed("COPYPASTE_LOG_LEVEL") {
        cfg.logging.level = v;
    }
    if let Some(v) = env_trimmed("COPYPASTE_LOG_JSON") {
        cfg.logging.json = v.eq_ignore_ascii_case("true") || v == "1";
    }
}

/// Read an env var, trimmed, treating empty as unset.
pub(crate) fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn resolve_relative(base: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() { p.to_path_buf() } else { base.join(p) }
}

/// Read a JSON file as a Value, returning an empty object if the file doesn't exist.
fn read_json_object_or_empty(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let v: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    match v {
        Value::Object(_) => Ok(v),
        _ => anyhow::bail!("Config root must be a JSON object: {}", path.display()),
    }
}
