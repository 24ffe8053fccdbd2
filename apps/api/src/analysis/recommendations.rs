//! Static learning-resource lookup for missing skills.

use std::collections::HashSet;

use serde::Serialize;

/// Upper bound on resources returned per request.
pub const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Course,
    Documentation,
    Certification,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningResource {
    pub skill: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

const fn resource(
    skill: &'static str,
    title: &'static str,
    url: &'static str,
    resource_type: ResourceType,
) -> LearningResource {
    LearningResource {
        skill,
        title,
        url,
        resource_type,
    }
}

/// Table order is the output order.
pub static RESOURCE_TABLE: [LearningResource; 10] = [
    resource("react", "React Official Docs", "https://react.dev", ResourceType::Course),
    resource(
        "javascript",
        "MDN Web Docs",
        "https://developer.mozilla.org/en-US/docs/Web/JavaScript",
        ResourceType::Documentation,
    ),
    resource(
        "python",
        "Python Tutorial",
        "https://docs.python.org/3/tutorial/",
        ResourceType::Documentation,
    ),
    resource(
        "docker",
        "Docker 101",
        "https://www.docker.com/101-tutorial/",
        ResourceType::Course,
    ),
    resource(
        "kubernetes",
        "K8s Basics",
        "https://kubernetes.io/docs/tutorials/kubernetes-basics/",
        ResourceType::Documentation,
    ),
    resource(
        "aws",
        "AWS Skill Builder",
        "https://explore.skillbuilder.aws/",
        ResourceType::Certification,
    ),
    resource("sql", "SQL Tutorial", "https://www.w3schools.com/sql/", ResourceType::Course),
    resource(
        "machine learning",
        "Google ML Crash Course",
        "https://developers.google.com/machine-learning/crash-course",
        ResourceType::Course,
    ),
    resource(
        "system design",
        "System Design Primer",
        "https://github.com/donnemartin/system-design-primer",
        ResourceType::Project,
    ),
    resource(
        "algorithms",
        "LeetCode Explore",
        "https://leetcode.com/explore/",
        ResourceType::Project,
    ),
];

/// Returns up to `MAX_RECOMMENDATIONS` resources covering `missing_skills`.
///
/// `target_role` is only logged; it does not influence selection.
pub fn recommend<S: AsRef<str>>(missing_skills: &[S], target_role: &str) -> Vec<LearningResource> {
    if missing_skills.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<String> = missing_skills
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    let picked: Vec<LearningResource> = RESOURCE_TABLE
        .iter()
        .filter(|r| wanted.contains(r.skill))
        .take(MAX_RECOMMENDATIONS)
        .copied()
        .collect();

    tracing::debug!(
        target_role,
        missing = wanted.len(),
        recommended = picked.len(),
        "Selected learning resources"
    );

    picked
}
