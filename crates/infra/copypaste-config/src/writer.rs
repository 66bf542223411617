//! Atomic file writing for configuration files.

use anyhow::{Context, Result};
use atomicwrites::{AllowOverwrite, AtomicFile};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Write a JSON value to `path` atomically with pretty formatting, creating
/// parent directories as needed.
pub fn write_pretty_json_atomic(path: &Path, value: &Value) -> Result<()> {
    ensure_parent(path)?;
    let json = to_pretty(value)?;

    AtomicFile::new(path, AllowOverwrite)
        .write(|f| f.write_all(json.as_bytes()))
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

fn to_pretty(value: &Value) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(value).context("Failed to serialize config to JSON")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("copypaste.json");

        write_pretty_json_atomic(&path, &json!({"models": {}})).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"models\""));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("copypaste.json");

        write_pretty_json_atomic(&path, &json!({"version": 1})).unwrap();
        write_pretty_json_atomic(&path, &json!({"version": 2})).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"version\": 2"));
    }
}
