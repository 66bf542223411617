use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error::GeminiError};

/// Gemini API client
///
/// The client is generic over a [`Config`] implementation that provides authentication
/// and API configuration. Each call is a single request: failures are returned as-is.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::GeminiConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables for authentication:
    /// - `GEMINI_API_KEY` for API key authentication
    /// - `GEMINI_BASE_URL` for custom API base URL
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::GeminiConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// Falls back to reqwest's default client if the tuned builder cannot be
    /// constructed (e.g. TLS backend initialisation failure).
    #[must_use]
    pub fn with_config(config: C) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("falling back to default HTTP client: {e}");
                reqwest::Client::new()
            });
        Self { http, config }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    pub(crate) async fn get<O: DeserializeOwned>(&self, path: &str) -> Result<O, GeminiError> {
        let request = self
            .http
            .get(self.config.url(path))
            .headers(self.config.headers()?)
            .query(&self.config.query())
            .build()?;
        self.execute(request).await
    }

    pub(crate) async fn get_with_query<Q, O>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<O, GeminiError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let request = self
            .http
            .get(self.config.url(path))
            .headers(self.config.headers()?)
            .query(&self.config.query())
            .query(query)
            .build()?;
        self.execute(request).await
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: &I) -> Result<O, GeminiError>
    where
        I: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.config.url(path))
            .headers(self.config.headers()?)
            .query(&self.config.query())
            .json(body)
            .build()?;
        self.execute(request).await
    }

    async fn execute<O: DeserializeOwned>(
        &self,
        request: reqwest::Request,
    ) -> Result<O, GeminiError> {
        // Validate auth before any request
        self.config.validate_auth()?;

        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!(%method, %path, "gemini request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            tracing::debug!(%method, %path, status = status.as_u16(), "gemini request failed");
            return Err(crate::error::deserialize_api_error(status, &bytes));
        }

        serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))
    }
}
