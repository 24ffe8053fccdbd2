//! Axum route handlers for the skill-gap API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::classifier::{Classification, GapClassifier};
use crate::analysis::extractor::extract_skills;
use crate::analysis::pipeline::{analyze, SkillGapReport};
use crate::analysis::recommendations::{recommend, LearningResource};
use crate::analysis::upload::{extract_resume_text, ResumeFormat};
use crate::errors::{AppError, AppJson};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description_text: String,
    pub target_role: String,
}

/// Signed on purpose so negative counts reach validation instead of failing
/// JSON decoding.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub matched: i64,
    pub missing: i64,
    pub total: i64,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub target_role: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<LearningResource>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ml/analyze
///
/// Full pipeline over raw resume and job-description text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<AnalyzeRequest>,
) -> Result<Json<SkillGapReport>, AppError> {
    info!(
        target_role = %request.target_role,
        resume_chars = request.resume_text.len(),
        job_chars = request.job_description_text.len(),
        "Analyzing skill gap"
    );

    let report = analyze(
        &request.resume_text,
        &request.job_description_text,
        &request.target_role,
        state.classifier.as_ref(),
    );

    Ok(Json(report))
}

/// POST /api/ml/analyze/upload
///
/// Multipart variant of `/api/ml/analyze`: the resume arrives as a PDF or
/// plain-text file part named `resume`.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SkillGapReport>, AppError> {
    let mut resume: Option<(ResumeFormat, Bytes)> = None;
    let mut job_description_text: Option<String> = None;
    let mut target_role = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let format = ResumeFormat::detect(field.content_type(), field.file_name())?;
                resume = Some((format, field.bytes().await?));
            }
            "jobDescriptionText" => job_description_text = Some(field.text().await?),
            "targetRole" => target_role = field.text().await?,
            other => {
                tracing::debug!("Ignoring unexpected multipart field '{other}'");
            }
        }
    }

    let (format, data) = resume
        .ok_or_else(|| AppError::Validation("Missing 'resume' file part".to_string()))?;
    let job_description_text = job_description_text.ok_or_else(|| {
        AppError::Validation("Missing 'jobDescriptionText' field".to_string())
    })?;

    info!(
        ?format,
        bytes = data.len(),
        target_role = %target_role,
        "Analyzing uploaded resume"
    );

    let resume_text = extract_resume_text(format, data).await?;

    let report = analyze(
        &resume_text,
        &job_description_text,
        &target_role,
        state.classifier.as_ref(),
    );

    Ok(Json(report))
}

/// POST /api/ml/classify
///
/// Classifier only. Negative counts are rejected with 400.
pub async fn handle_classify(
    State(state): State<AppState>,
    AppJson(request): AppJson<ClassifyRequest>,
) -> Result<Json<Classification>, AppError> {
    let classification = state
        .classifier
        .classify_signed(request.matched, request.missing, request.total)?;
    Ok(Json(classification))
}

/// POST /api/ml/extract
pub async fn handle_extract(AppJson(request): AppJson<ExtractRequest>) -> Json<ExtractResponse> {
    Json(ExtractResponse {
        skills: extract_skills(&request.text).into_iter().collect(),
    })
}

/// POST /api/ml/recommendations
pub async fn handle_recommendations(
    AppJson(request): AppJson<RecommendationsRequest>,
) -> Json<RecommendationsResponse> {
    Json(RecommendationsResponse {
        recommendations: recommend(request.missing_skills.as_slice(), &request.target_role),
    })
}
