#![warn(missing_docs)]

//! Async Gemini generative-language API client with typed requests/responses and wiremock tests.
//!
//! ```no_run
//! use gemini_async::{Client, GeminiConfig, types::GenerateContentRequest};
//!
//! # async fn example() -> Result<(), gemini_async::GeminiError> {
//! let client = Client::with_config(GeminiConfig::new().with_api_key("key"));
//! let resp = client
//!     .models()
//!     .generate_content("gemini-1.5-flash", &GenerateContentRequest::from_prompt("Hi"))
//!     .await?;
//! println!("{}", resp.text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! Requests are sent once; failed calls surface as [`GeminiError`] without retries.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::GeminiConfig;
pub use crate::error::{ApiErrorObject, GeminiError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, GeminiConfig};
}
