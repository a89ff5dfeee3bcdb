//! Axum route handlers for the Analysis API.
//!
//! Upload plumbing failures (missing field, unreadable PDF) are HTTP errors.
//! Core analysis failures are not: they surface inside the response body as
//! structured `{"error": ...}` sections, so callers always get a well-formed
//! 200 response once the text made it in.

use std::collections::HashMap;

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::analysis::orchestrator::{
    analyze_document, comprehensive, AnalysisOutcome, ComprehensiveReport, KeywordReport,
};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeJobDescriptionRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractedAnalysisResponse {
    pub extracted_text: String,
    pub tfidf_analysis: AnalysisOutcome<KeywordReport>,
}

#[derive(Debug, Serialize)]
pub struct JobDescriptionAnalysisResponse {
    pub job_description_text: String,
    pub tfidf_analysis: AnalysisOutcome<KeywordReport>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub resume_text: String,
    pub job_description_text: String,
    pub analysis: ComprehensiveReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze-resume
///
/// Multipart upload with a `file` part (PDF). Extracts text and returns the
/// top TF-IDF keywords alongside the extracted text.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractedAnalysisResponse>, AppError> {
    extract_and_analyze(&state, multipart).await
}

/// POST /api/v1/analyze-job-description
///
/// Plain-text job description in a JSON body. No extraction involved.
pub async fn handle_analyze_job_description(
    Json(request): Json<AnalyzeJobDescriptionRequest>,
) -> Result<Json<JobDescriptionAnalysisResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let tfidf_analysis = analyze_document(&request.job_description).into();

    Ok(Json(JobDescriptionAnalysisResponse {
        job_description_text: request.job_description,
        tfidf_analysis,
    }))
}

/// POST /api/v1/analyze-job-description-pdf
///
/// Same as analyze-resume but for a job description supplied as a PDF.
pub async fn handle_analyze_job_description_pdf(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractedAnalysisResponse>, AppError> {
    extract_and_analyze(&state, multipart).await
}

/// Shared path for the single-PDF analysis endpoints: pull the `file` part,
/// extract its text, run single-document analysis.
async fn extract_and_analyze(
    state: &AppState,
    multipart: Multipart,
) -> Result<Json<ExtractedAnalysisResponse>, AppError> {
    let mut fields = collect_fields(multipart).await?;
    let file = require_field(&mut fields, "file")?;

    let extracted_text = state.extractor.extract(file).await?;
    let tfidf_analysis = analyze_document(&extracted_text).into();

    Ok(Json(ExtractedAnalysisResponse {
        extracted_text,
        tfidf_analysis,
    }))
}

/// POST /api/v1/match-resume-job
///
/// Multipart upload: `file` (resume PDF) + `job_description` (text field).
/// Runs the full comprehensive analysis.
pub async fn handle_match_resume_job(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let mut fields = collect_fields(multipart).await?;
    let file = require_field(&mut fields, "file")?;
    let job_description = require_text_field(&mut fields, "job_description")?;

    let resume_text = state.extractor.extract(file).await?;
    let analysis = comprehensive(&resume_text, &job_description);

    Ok(Json(MatchResponse {
        resume_text,
        job_description_text: job_description,
        analysis,
    }))
}

/// POST /api/v1/match-resume-job-pdf
///
/// Multipart upload: `file` (resume PDF) + `jd_file` (job description PDF).
pub async fn handle_match_resume_job_pdf(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let mut fields = collect_fields(multipart).await?;
    let resume_file = require_field(&mut fields, "file")?;
    let jd_file = require_field(&mut fields, "jd_file")?;

    let resume_text = state.extractor.extract(resume_file).await?;
    let job_description_text = state.extractor.extract(jd_file).await?;
    let analysis = comprehensive(&resume_text, &job_description_text);

    Ok(Json(MatchResponse {
        resume_text,
        job_description_text,
        analysis,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart helpers
// ────────────────────────────────────────────────────────────────────────────

/// Drains the multipart stream into a name → bytes map.
async fn collect_fields(mut multipart: Multipart) -> Result<HashMap<String, Bytes>, AppError> {
    let mut fields = HashMap::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read field '{name}': {e}")))?;
        fields.insert(name, data);
    }
    Ok(fields)
}

fn require_field(fields: &mut HashMap<String, Bytes>, name: &str) -> Result<Bytes, AppError> {
    fields
        .remove(name)
        .ok_or_else(|| AppError::Validation(format!("missing multipart field '{name}'")))
}

fn require_text_field(fields: &mut HashMap<String, Bytes>, name: &str) -> Result<String, AppError> {
    let data = require_field(fields, name)?;
    String::from_utf8(data.to_vec())
        .map_err(|_| AppError::Validation(format!("field '{name}' is not valid UTF-8")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field_reports_missing_name() {
        let mut fields = HashMap::new();
        let err = require_field(&mut fields, "file").unwrap_err();
        assert!(err.to_string().contains("file"));
    }

    #[test]
    fn test_require_text_field_rejects_invalid_utf8() {
        let mut fields = HashMap::new();
        fields.insert("job_description".to_string(), Bytes::from_static(&[0xff, 0xfe]));
        let err = require_text_field(&mut fields, "job_description").unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_require_text_field_decodes_utf8() {
        let mut fields = HashMap::new();
        fields.insert("job_description".to_string(), Bytes::from_static(b"Rust dev"));
        let text = require_text_field(&mut fields, "job_description").unwrap();
        assert_eq!(text, "Rust dev");
    }
}
