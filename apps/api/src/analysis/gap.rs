use std::collections::BTreeSet;

use crate::analysis::classifier::GapCounts;

/// Set comparison of resume skills against the skills a job requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillGap {
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    pub total_required: usize,
}

impl SkillGap {
    /// Counts fed to the classifier. Saturates at `u32::MAX`, far beyond the
    /// vocabulary size.
    pub fn counts(&self) -> GapCounts {
        let clamp = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        GapCounts::new(
            clamp(self.matched.len()),
            clamp(self.missing.len()),
            clamp(self.total_required),
        )
    }
}

pub fn compute_gap(resume_skills: &BTreeSet<String>, job_skills: &BTreeSet<String>) -> SkillGap {
    SkillGap {
        matched: resume_skills.intersection(job_skills).cloned().collect(),
        missing: job_skills.difference(resume_skills).cloned().collect(),
        total_required: job_skills.len(),
    }
}
