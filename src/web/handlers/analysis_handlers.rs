// src/web/handlers/analysis_handlers.rs
use crate::career_analysis::{ResumeAnalysis, ResumeAnalyzer, RoadmapOutcome};
use crate::document::{extract_resume_text, is_pdf};
use crate::web::types::{ResumeUploadForm, RoadmapRequest, StandardErrorResponse};

use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;
use std::path::Path;
use tracing::{error, info, warn};

pub async fn analyze_resume_handler(
    mut upload: Form<ResumeUploadForm<'_>>,
    analyzer: &State<ResumeAnalyzer>,
) -> Result<Json<ResumeAnalysis>, Json<StandardErrorResponse>> {
    let job_title = upload.job_title.trim().to_string();
    if job_title.is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Job title is required.".to_string(),
            "MISSING_FIELDS".to_string(),
            vec!["Provide a non-empty job_title".to_string()],
        )));
    }

    let file_name = upload
        .resume
        .raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_string());
    let content_type_is_pdf = upload
        .resume
        .content_type()
        .map_or(false, |ct| ct.is_pdf());
    let pdf = is_pdf(file_name.as_deref(), content_type_is_pdf);

    info!(
        "Resume upload for '{}' ({} bytes, pdf: {})",
        job_title,
        upload.resume.len(),
        pdf
    );

    let temp_path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));

    if let Err(e) = upload.resume.persist_to(&temp_path).await {
        error!("Failed to save uploaded file: {}", e);
        return Err(Json(StandardErrorResponse::new(
            "Failed to process uploaded file".to_string(),
            "FILE_SAVE_ERROR".to_string(),
            vec!["Try uploading the file again".to_string()],
        )));
    }

    let bytes = match take_upload(&temp_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read uploaded file: {}", e);
            return Err(Json(StandardErrorResponse::new(
                "Failed to process uploaded file".to_string(),
                "FILE_READ_ERROR".to_string(),
                vec!["Try uploading the file again".to_string()],
            )));
        }
    };

    let resume_text = match extract_resume_text(bytes, pdf).await {
        Ok(text) => text,
        Err(e) => {
            error!("Resume text extraction failed: {:#}", e);
            return Err(Json(StandardErrorResponse::new(
                e.to_string(),
                "PDF_READ_ERROR".to_string(),
                vec![
                    "Ensure the PDF has selectable text".to_string(),
                    "Upload the resume as a plain text file".to_string(),
                ],
            )));
        }
    };

    let analysis = analyzer.analyze_resume(&resume_text, &job_title).await;
    Ok(Json(analysis))
}

/// Reads a persisted upload and removes it. A failed removal is only logged.
async fn take_upload(path: &Path) -> std::io::Result<Vec<u8>> {
    let bytes = tokio::fs::read(path).await;
    if let Err(e) = tokio::fs::remove_file(path).await {
        warn!("Failed to remove temp upload {}: {}", path.display(), e);
    }
    bytes
}

pub async fn generate_roadmap_handler(
    request: Json<RoadmapRequest>,
    analyzer: &State<ResumeAnalyzer>,
) -> Result<Json<RoadmapOutcome>, Json<StandardErrorResponse>> {
    let field_of_interest = request.field_of_interest.trim();

    if field_of_interest.is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Field of interest is required for roadmap generation.".to_string(),
            "MISSING_FIELDS".to_string(),
            vec!["Run a resume analysis first to infer a field of interest".to_string()],
        )));
    }

    Ok(Json(analyzer.generate_roadmap(field_of_interest).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_take_upload_reads_and_removes_file() {
        let path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, b"Jane Doe").await.unwrap();

        let bytes = take_upload(&path).await.unwrap();
        assert_eq!(bytes, b"Jane Doe");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_take_upload_missing_file_is_read_error() {
        let path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));
        assert!(take_upload(&path).await.is_err());
    }
}
