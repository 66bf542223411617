//! API resource implementations for the Gemini client

/// Models API resource (listing and content generation)
pub mod models;

pub use models::Models;
