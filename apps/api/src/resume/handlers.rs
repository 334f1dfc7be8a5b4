//! Axum route handlers for résumé extraction.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ExtractedResumeData;
use crate::resume::upload::ResumeUpload;
use crate::state::AppState;

/// POST /api/extract-skills
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractedResumeData>, AppError> {
    let upload = ResumeUpload::from_multipart(multipart).await?;
    let data = upload
        .parse(state.resume_parser.clone(), |parser, path| {
            parser.extract_resume_data(path)
        })
        .await?;

    info!(
        file_name = %upload.file_name,
        skills = data.skills.len(),
        "Resume fields extracted"
    );
    Ok(Json(data))
}
