use crate::{
    client::Client,
    config::Config,
    error::GeminiError,
    types::{
        content::{GenerateContentRequest, GenerateContentResponse},
        models::{ListModelsQuery, ListModelsResponse, Model, model_resource_name},
    },
};

/// Upper bound on pages followed by [`Models::list_all`]
const MAX_LIST_PAGES: usize = 50;

/// API resource for the `models` collection
pub struct Models<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Models<'c, C> {
    /// Creates a new Models resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists one page of models.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response cannot be parsed.
    pub async fn list(&self, query: &ListModelsQuery) -> Result<ListModelsResponse, GeminiError> {
        self.client.get_with_query("models", query).await
    }

    /// Lists every model, following `nextPageToken`.
    ///
    /// # Errors
    ///
    /// Returns the first page error encountered.
    pub async fn list_all(&self) -> Result<Vec<Model>, GeminiError> {
        let mut query = ListModelsQuery {
            page_size: Some(100),
            page_token: None,
        };
        let mut models = Vec::new();

        for _ in 0..MAX_LIST_PAGES {
            let page = self.list(&query).await?;
            models.extend(page.models);
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => query.page_token = Some(token),
                None => return Ok(models),
            }
        }

        tracing::warn!(pages = MAX_LIST_PAGES, "model listing truncated");
        Ok(models)
    }

    /// Gets details for a specific model (`gemini-1.5-flash` or `models/gemini-1.5-flash`).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response cannot be parsed.
    pub async fn get(&self, model: &str) -> Result<Model, GeminiError> {
        self.client.get(&model_resource_name(model)).await
    }

    /// Generates a response from `model` for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing, the request fails, or the
    /// API returns an error.
    pub async fn generate_content(
        &self,
        model: &str,
        req: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let path = format!("{}:generateContent", model_resource_name(model));
        self.client.post(&path, req).await
    }

    /// Generates a response and returns only its text.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::EmptyResponse`] when the model produced no text,
    /// plus every error of [`Self::generate_content`].
    pub async fn generate_text(
        &self,
        model: &str,
        req: &GenerateContentRequest,
    ) -> Result<String, GeminiError> {
        let resp = self.generate_content(model, req).await?;
        resp.text().ok_or_else(|| GeminiError::EmptyResponse {
            block_reason: resp.block_reason().map(str::to_string),
        })
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Models API resource
    #[must_use]
    pub const fn models(&self) -> Models<'_, C> {
        Models::new(self)
    }
}
