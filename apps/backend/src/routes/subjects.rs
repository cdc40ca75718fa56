//! Subject and sample deck endpoints

use axum::{extract::Path, Json};
use flashcard_core::samples::sample_deck;

use crate::error::{ApiError, Result};
use crate::models::*;

/// GET /api/subjects
pub async fn list() -> Json<SubjectListResponse> {
    Json(SubjectListResponse {
        subjects: Subject::ALL.to_vec(),
    })
}

/// GET /api/samples/:subject
pub async fn sample(Path(name): Path<String>) -> Result<Json<SampleDeckResponse>> {
    let subject = Subject::from_name(&name)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown subject: {}", name)))?;

    let cards = sample_deck(subject)
        .ok_or_else(|| ApiError::NotFound(format!("No sample deck for {}", subject)))?;

    Ok(Json(SampleDeckResponse { subject, cards }))
}
