use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default Gemini API base URL
pub const GEMINI_DEFAULT_BASE: &str = "https://generativelanguage.googleapis.com";
/// Default API version path segment
pub const GEMINI_DEFAULT_VERSION: &str = "v1beta";
/// Header name for API key authentication
pub const HDR_X_GOOG_API_KEY: &str = "x-goog-api-key";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "GEMINI_BASE_URL";

/// Configuration for the Gemini client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    api_base: String,
    api_version: String,
    api_key: Option<SecretString>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        let api_key = env_trimmed(ENV_API_KEY).map(SecretString::from);
        let api_base = env_trimmed(ENV_BASE_URL).unwrap_or_else(|| GEMINI_DEFAULT_BASE.into());

        Self {
            api_base,
            api_version: GEMINI_DEFAULT_VERSION.into(),
            api_key,
        }
    }
}

fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl GeminiConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `GEMINI_API_KEY` for API key authentication
    /// - `GEMINI_BASE_URL` for custom API base URL (defaults to `https://generativelanguage.googleapis.com`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API version path segment (e.g. `v1` or `v1beta`)
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Sets the API key from an existing secret
    #[must_use]
    pub fn with_api_key_secret(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the configured API version
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }
}

/// Configuration trait for the Gemini client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::GeminiError>;

    /// Constructs the full URL for an API endpoint path relative to the versioned root
    fn url(&self, path: &str) -> String;

    /// Returns query parameters to include in requests
    fn query(&self) -> Vec<(&str, &str)>;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::GeminiError>;
}

impl Config for GeminiConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::GeminiError> {
        use crate::error::GeminiError;

        let mut h = HeaderMap::new();

        if let Some(secret) = &self.api_key {
            let key = secret.expose_secret().trim();
            if !key.is_empty() {
                let mut value = HeaderValue::from_str(key)
                    .map_err(|_| GeminiError::Config("Invalid x-goog-api-key value".into()))?;
                value.set_sensitive(true);
                h.insert(HDR_X_GOOG_API_KEY, value);
            }
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let version = self.api_version.trim_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{version}/{path}")
    }

    fn query(&self) -> Vec<(&str, &str)> {
        vec![]
    }

    fn validate_auth(&self) -> Result<(), crate::error::GeminiError> {
        match &self.api_key {
            Some(secret) if !secret.expose_secret().trim().is_empty() => Ok(()),
            _ => Err(crate::error::GeminiError::Config(
                "Missing Gemini credentials: set GEMINI_API_KEY environment variable".into(),
            )),
        }
    }
}
