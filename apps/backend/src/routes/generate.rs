//! Generation endpoint

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::generation::Generation;
use crate::AppState;

/// POST /api/generate
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let min_chars = state.config.min_content_chars;
    if payload.content.trim().chars().count() < min_chars {
        return Err(ApiError::BadRequest(format!(
            "Content seems too short; provide at least {} characters of material",
            min_chars
        )));
    }

    let max_cards = state.config.max_cards;
    if payload.count == 0 || payload.count > max_cards {
        return Err(ApiError::BadRequest(format!(
            "count must be between 1 and {}",
            max_cards
        )));
    }

    let request = GenerationRequest::new(payload.content, payload.subject, payload.count);

    let generation = match payload.mode {
        GenerationMode::Offline => Generation::offline(&state.heuristic, &request),
        GenerationMode::Remote => {
            let remote = state.remote.as_ref().ok_or_else(|| {
                ApiError::BadRequest(
                    "Remote generation is not configured (set HF_API_TOKEN) - use offline mode"
                        .to_string(),
                )
            })?;
            remote.build(&request).await
        }
    };

    if generation.cards.is_empty() {
        return Err(ApiError::GenerationFailed(
            "no flashcards could be generated from this content".to_string(),
        ));
    }

    info!(
        cards = generation.cards.len(),
        subject = %request.subject,
        strategy = ?generation.strategy,
        "Generated flashcards"
    );

    Ok(Json(GenerateResponse {
        cards: generation.cards,
        strategy: generation.strategy,
        warnings: generation.warnings,
        generated_at: Utc::now(),
    }))
}
