use super::types::{ErrorResponse, HealthResponse, RenderFormat, RenderQuery, RenderRequest};
use crate::{
    render,
    resume::{
        CompletionGateway, GenerationOutcome, GenerationRequest, GenerationResult,
        ImprovementRequest, ImprovementResult,
    },
};
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<CompletionGateway>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

pub async fn generate_resume(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationOutcome>, HandlerError> {
    let request_id = Uuid::new_v4();
    info!(
        "[{}] Received resume generation request for: {}",
        request_id, request.user_info.name
    );

    match state.gateway.generate_resume(&request).await {
        Ok(outcome) => {
            info!(
                "[{}] Generated resume (structured: {})",
                request_id,
                outcome.is_structured()
            );
            Ok(Json(outcome))
        }
        Err(e) => {
            error!("[{}] Failed to generate resume: {}", request_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to generate resume".to_string(),
                    details: Some(e.to_string()),
                }),
            ))
        }
    }
}

pub async fn suggest_improvements(
    State(state): State<AppState>,
    Json(request): Json<ImprovementRequest>,
) -> Result<Json<ImprovementResult>, HandlerError> {
    let request_id = Uuid::new_v4();
    info!(
        "[{}] Received improvement request for section: {}",
        request_id, request.section
    );

    match state.gateway.suggest_improvements(&request).await {
        Ok(result) => {
            info!(
                "[{}] Returning {} suggestions",
                request_id,
                result.suggestions.len()
            );
            Ok(Json(result))
        }
        Err(e) => {
            error!("[{}] Failed to generate suggestions: {}", request_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to generate suggestions".to_string(),
                    details: None,
                }),
            ))
        }
    }
}

pub async fn render_resume(
    Query(query): Query<RenderQuery>,
    Json(request): Json<RenderRequest>,
) -> Response {
    let name = request.name.unwrap_or_default();
    let result = GenerationResult::from_object(&request.result);

    match query.format {
        RenderFormat::Html => {
            let filename = render::download_filename(&name);
            info!("Rendering resume document as {}", filename);
            (
                [
                    (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{filename}\""),
                    ),
                ],
                render::render_document(&name, &result),
            )
                .into_response()
        }
        RenderFormat::Text => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render::plain_text(&result),
        )
            .into_response(),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
