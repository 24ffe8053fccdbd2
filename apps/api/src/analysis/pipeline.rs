//! Skill-gap analysis: orchestrates the three stateless lookups.
//!
//! Flow: extract_skills(resume) + extract_skills(job) → compute_gap →
//!       classifier.classify → recommend(missing).

use serde::Serialize;
use tracing::info;

use crate::analysis::classifier::{GapClassifier, GapLabel};
use crate::analysis::extractor::extract_skills;
use crate::analysis::gap::compute_gap;
use crate::analysis::recommendations::{recommend, LearningResource};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Combined analysis result. Skill lists are sorted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapReport {
    /// Every known skill found in the resume, required by the job or not.
    pub extracted_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub classification: GapLabel,
    pub confidence_score: f64,
    pub recommendations: Vec<LearningResource>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs extraction, gap computation, classification and resource lookup.
/// Pure apart from logging.
pub fn analyze(
    resume_text: &str,
    job_description_text: &str,
    target_role: &str,
    classifier: &dyn GapClassifier,
) -> SkillGapReport {
    let resume_skills = extract_skills(resume_text);
    let job_skills = extract_skills(job_description_text);

    let gap = compute_gap(&resume_skills, &job_skills);
    let classification = classifier.classify(gap.counts());
    info!(
        backend = classifier.backend(),
        matched = gap.matched.len(),
        missing = gap.missing.len(),
        total = gap.total_required,
        label = %classification.label,
        confidence = classification.confidence,
        "Classified skill gap"
    );

    let missing_skills: Vec<String> = gap.missing.into_iter().collect();
    let recommendations = recommend(missing_skills.as_slice(), target_role);

    SkillGapReport {
        extracted_skills: resume_skills.into_iter().collect(),
        matched_skills: gap.matched.into_iter().collect(),
        missing_skills,
        classification: classification.label,
        confidence_score: classification.confidence,
        recommendations,
    }
}
