//! Types for the `models` collection

use serde::{Deserialize, Serialize};

/// Generation method name required to answer prompts
pub const GENERATE_CONTENT_METHOD: &str = "generateContent";

/// Metadata describing a Gemini model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Resource name, e.g. `models/gemini-1.5-flash`
    pub name: String,
    /// Base model id
    #[serde(default)]
    pub base_model_id: Option<String>,
    /// Model version
    #[serde(default)]
    pub version: Option<String>,
    /// Human-readable name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Maximum input tokens
    #[serde(default)]
    pub input_token_limit: Option<u64>,
    /// Maximum output tokens
    #[serde(default)]
    pub output_token_limit: Option<u64>,
    /// Methods this model supports (e.g. `generateContent`, `embedContent`)
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl Model {
    /// Model id without the `models/` prefix
    #[must_use]
    pub fn id(&self) -> &str {
        self.name.strip_prefix("models/").unwrap_or(&self.name)
    }

    /// True when the model can answer `generateContent` calls
    #[must_use]
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT_METHOD)
    }
}

/// Query parameters for `GET /models`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListModelsQuery {
    /// Maximum models per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Response from `GET /models`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListModelsResponse {
    /// Models on this page
    #[serde(default)]
    pub models: Vec<Model>,
    /// Token for the next page, absent on the last page
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Normalizes a model name to its resource form (`models/<id>`)
#[must_use]
pub fn model_resource_name(model: &str) -> String {
    let model = model.trim();
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}
