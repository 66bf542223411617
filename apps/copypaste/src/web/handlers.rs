use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use copypaste_config::{CredentialSource, MISSING_KEY_HELP, NoPrompt, ResolvedCredential, SuppliedKey};
use gemini_async::GeminiError;
use serde::{Deserialize, Serialize};

use super::{AppState, page::INDEX_HTML};
use crate::pipeline::{PipelineError, clean_input, gemini_client, generate_answer};

#[derive(Deserialize)]
pub struct CleanRequest {
    text: String,
}

#[derive(Serialize)]
pub struct CleanResponse {
    cleaned: String,
    removed: usize,
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    text: String,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    api_key: Option<String>,
}

#[derive(Serialize)]
pub struct AnswerResponse {
    cleaned: String,
    removed: usize,
    answer: String,
    model: String,
}

#[derive(Serialize)]
pub struct ModelSummary {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
}

/// JSON error body with an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    help: Option<&'static str>,
}

impl ApiError {
    fn missing_key() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: "No Gemini API key available".into(),
            help: Some(MISSING_KEY_HELP),
        }
    }

    fn internal(e: &anyhow::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: format!("{e:#}"),
            help: None,
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        let status = match &e {
            PipelineError::EmptyInput | PipelineError::NothingLeft => StatusCode::BAD_REQUEST,
            PipelineError::Gemini(g) if g.is_auth_error() => StatusCode::UNAUTHORIZED,
            PipelineError::Gemini(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            error: e.to_string(),
            help: (status == StatusCode::UNAUTHORIZED).then_some(MISSING_KEY_HELP),
        }
    }
}

impl From<GeminiError> for ApiError {
    fn from(e: GeminiError) -> Self {
        PipelineError::Gemini(e).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({ "error": self.error });
        if let Some(help) = self.help {
            body["help"] = help.into();
        }
        (self.status, Json(body)).into_response()
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn clean(
    State(state): State<AppState>,
    Json(req): Json<CleanRequest>,
) -> Result<Json<CleanResponse>, ApiError> {
    let report = clean_input(&state.scrubber, &req.text)?;
    Ok(Json(CleanResponse {
        cleaned: report.text,
        removed: report.removed,
    }))
}

pub async fn answer(
    State(state): State<AppState>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let report = clean_input(&state.scrubber, &req.text)?;

    let cred = {
        let mut credentials = state.credentials.lock().await;
        credentials
            .resolve(&mut SuppliedKey::new(req.api_key))
            .map_err(|e| ApiError::internal(&e))?
    }
    .ok_or_else(ApiError::missing_key)?;

    let model = req
        .model
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| state.config.models.default_model.clone());

    let client = gemini_client(&state.config, &cred.key);
    let result =
        generate_answer(&client, &model, &state.config.prompt.template, &report.text).await;

    match result {
        Ok(answer) => Ok(Json(AnswerResponse {
            cleaned: report.text,
            removed: report.removed,
            answer,
            model,
        })),
        Err(e) => {
            if let PipelineError::Gemini(g) = &e
                && g.is_auth_error()
            {
                forget_session_key(&state, &cred).await;
            }
            tracing::warn!(%model, "answer failed: {e}");
            Err(e.into())
        }
    }
}

pub async fn models(State(state): State<AppState>) -> Result<Json<Vec<ModelSummary>>, ApiError> {
    let cred = {
        let mut credentials = state.credentials.lock().await;
        credentials
            .resolve(&mut NoPrompt)
            .map_err(|e| ApiError::internal(&e))?
    }
    .ok_or_else(ApiError::missing_key)?;

    let models = gemini_client(&state.config, &cred.key)
        .models()
        .list_all()
        .await?
        .into_iter()
        .filter(gemini_async::types::Model::supports_generate_content)
        .map(|m| ModelSummary {
            id: m.id().to_string(),
            display_name: m.display_name,
        })
        .collect();

    Ok(Json(models))
}

/// Drop a session key Gemini rejected so the next request can supply another.
async fn forget_session_key(state: &AppState, cred: &ResolvedCredential) {
    if matches!(
        cred.source,
        CredentialSource::Supplied | CredentialSource::Session | CredentialSource::Prompt
    ) {
        state.credentials.lock().await.clear_session();
        tracing::info!("cleared rejected session API key");
    }
}
