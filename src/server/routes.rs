use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};

use crate::models::{Document, ScanReport};
use crate::server::error::ApiError;
use crate::server::page::INDEX_HTML;
use crate::server::AppState;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Accepts multipart fields `resume` (file) and `jobdesc` (text).
///
/// The upload stays in memory for the duration of the request.
pub async fn scan(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScanReport>, ApiError> {
    let mut document: Option<Document> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                document = Some(Document::new(filename, bytes.to_vec()));
            }
            "jobdesc" => {
                job_description = field.text().await?;
            }
            other => {
                tracing::debug!("Ignoring unexpected form field: {}", other);
            }
        }
    }

    let document = document.ok_or_else(|| ApiError::BadRequest("No resume uploaded".to_string()))?;

    // PDF and DOCX decoding is CPU-bound.
    let pipeline = state.pipeline.clone();
    let report = tokio::task::spawn_blocking(move || pipeline.run(&document, &job_description))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(report))
}
