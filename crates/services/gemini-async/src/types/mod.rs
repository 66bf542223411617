//! Request and response types for the Gemini API

/// `generateContent` request/response types
pub mod content;
/// Model metadata and listing types
pub mod models;

pub use content::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PromptFeedback, Role, UsageMetadata,
};
pub use models::{ListModelsQuery, ListModelsResponse, Model, model_resource_name};
