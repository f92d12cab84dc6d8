use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, Router, extract::State, routing::post};

use crate::error::AppError;
use crate::state::AppState;
use crate::types::{GenerateRequest, GenerateResponse};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate).options(options_ok))
}

/// Bare OPTIONS gets a 200 on every route; the CORS layer decorates the
/// response on the way out.
pub(crate) async fn options_ok() -> StatusCode {
    StatusCode::OK
}

async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(req) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;

    let api_key = req.api_key.unwrap_or_default();
    let prompt = req.prompt.unwrap_or_default();
    if api_key.is_empty() || prompt.is_empty() {
        return Err(AppError::BadRequest("Missing API key or prompt".into()));
    }

    let provider = req.provider.unwrap_or_default();
    let model_id = state.config.model_for(&provider);
    let client = (state.clients)(&provider, api_key, model_id);

    let content = client.generate(&prompt).await.map_err(|err| {
        tracing::warn!(?provider, %err, "generation failed");
        AppError::Provider(err)
    })?;

    Ok(Json(GenerateResponse::ok(
        content,
        req.is_text_response.unwrap_or(false),
    )))
}
