//! File extraction endpoint

use axum::{
    body::Bytes,
    http::{header, HeaderMap},
    Json,
};
use tracing::{info, warn};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::extract::{extract_text, SourceKind};

/// POST /api/extract
///
/// Body is the raw file; Content-Type selects plain text or PDF.
pub async fn extract(headers: HeaderMap, body: Bytes) -> Result<Json<ExtractResponse>> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("text/plain");

    let kind = SourceKind::from_content_type(content_type)
        .ok_or_else(|| ApiError::UnsupportedMedia(content_type.to_string()))?;

    let content = tokio::task::spawn_blocking(move || extract_text(&body, kind))
        .await
        .map_err(|e| {
            warn!(error = %e, "Text extraction aborted");
            ApiError::Internal(format!("text extraction aborted: {}", e))
        })?;

    info!(kind = ?kind, chars = content.chars().count(), "Extracted upload");
    Ok(Json(ExtractResponse::from_content(content)))
}
