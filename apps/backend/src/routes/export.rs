//! Export endpoint

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use flashcard_core::ExportFormat;

use crate::error::{ApiError, Result};
use crate::models::*;

/// POST /api/export/:format
pub async fn export(
    Path(format): Path<String>,
    Json(payload): Json<ExportRequest>,
) -> Result<Response> {
    let export_format = ExportFormat::from_str(&format)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown export format: {}", format)))?;

    let body = export_format.render(&payload.cards)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_format.file_name(payload.subject)
    );

    Ok((
        [
            (header::CONTENT_TYPE, export_format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
