use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when using the Gemini API client
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by Gemini
    #[error("API error {0}")]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),

    /// The model answered with no text
    #[error("Empty response from Gemini{}", blocked_suffix(.block_reason.as_deref()))]
    EmptyResponse {
        /// Prompt block reason reported by the API, if any
        block_reason: Option<String>,
    },
}

/// API error object from Gemini
///
/// Gemini wraps errors as `{"error": {"code": 403, "message": "...", "status": "PERMISSION_DENIED"}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// HTTP status code
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Canonical status string (e.g. `INVALID_ARGUMENT`)
    #[serde(default)]
    pub status: Option<String>,
}

impl std::fmt::Display for ApiErrorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "({code}): {}", self.message),
            None => write!(f, "(unknown): {}", self.message),
        }
    }
}

fn blocked_suffix(reason: Option<&str>) -> String {
    reason.map(|r| format!(" (blocked: {r})")).unwrap_or_default()
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorObject,
}

impl GeminiError {
    /// True for credential problems the user can fix by supplying another key.
    ///
    /// Gemini reports a malformed or revoked key as `400 INVALID_ARGUMENT`
    /// with an "API key not valid" message, so that case counts too.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Api(obj) => {
                matches!(obj.code, Some(401 | 403)) || obj.message.contains("API key not valid")
            }
            Self::Config(_) => true,
            Self::Reqwest(_) | Self::Serde(_) | Self::EmptyResponse { .. } => false,
        }
    }
}

/// Maps a serde deserialization error to a `GeminiError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> GeminiError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    GeminiError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response body
///
/// Attempts to parse the `{"error": {...}}` envelope, falling back to plain text on failure.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> GeminiError {
    let code = Some(status.as_u16());

    if let Ok(ApiErrorEnvelope { error: mut obj }) = serde_json::from_slice(body) {
        obj.code = obj.code.or(code);
        return GeminiError::Api(obj);
    }

    // Proxies and load balancers may answer with plain text; cap body to avoid log/memory bloat
    GeminiError::Api(ApiErrorObject {
        code,
        message: String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned(),
        status: Some(format!("http_{}", status.as_u16())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_error_envelope() {
        let body = br#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let GeminiError::Api(obj) = deserialize_api_error(StatusCode::BAD_REQUEST, body) else {
            panic!("expected Api error");
        };
        assert_eq!(obj.code, Some(400));
        assert_eq!(obj.message, "API key not valid");
        assert_eq!(obj.status.as_deref(), Some("INVALID_ARGUMENT"));
    }

    #[test]
    fn plain_text_body_is_capped() {
        let body = "x".repeat(1000);
        let GeminiError::Api(obj) =
            deserialize_api_error(StatusCode::BAD_GATEWAY, body.as_bytes())
        else {
            panic!("expected Api error");
        };
        assert_eq!(obj.code, Some(502));
        assert_eq!(obj.message.len(), 400);
        assert_eq!(obj.status.as_deref(), Some("http_502"));
    }

    #[test]
    fn auth_errors() {
        let api = |code| {
            GeminiError::Api(ApiErrorObject {
                code: Some(code),
                message: String::new(),
                status: None,
            })
        };
        assert!(api(403).is_auth_error());
        assert!(api(401).is_auth_error());
        assert!(!api(429).is_auth_error());

        let invalid_key = deserialize_api_error(
            StatusCode::BAD_REQUEST,
            br#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#,
        );
        assert!(invalid_key.is_auth_error());
        assert!(!GeminiError::EmptyResponse { block_reason: None }.is_auth_error());
    }

    #[test]
    fn display_messages() {
        let err = GeminiError::EmptyResponse {
            block_reason: Some("SAFETY".into()),
        };
        assert_eq!(err.to_string(), "Empty response from Gemini (blocked: SAFETY)");

        let err = GeminiError::Api(ApiErrorObject {
            code: Some(404),
            message: "models/nope is not found".into(),
            status: Some("NOT_FOUND".into()),
        });
        assert_eq!(err.to_string(), "API error (404): models/nope is not found");
    }
}
