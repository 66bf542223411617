//! JSON Schema generation for `CopyPasteConfig`.

use crate::types::CopyPasteConfig;
use schemars::{Schema, generate::SchemaSettings};

/// Generate the JSON Schema for `CopyPasteConfig`.
pub fn schema() -> Schema {
    SchemaSettings::default()
        .into_generator()
        .into_root_schema_for::<CopyPasteConfig>()
}

/// Generate the JSON Schema as a pretty-printed JSON string.
pub fn schema_json_pretty() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&schema())?)
}
