//! Dictionary-based skill extraction.
//!
//! Text is lowercased and tokenized; single tokens and consecutive token
//! windows are matched exactly against a fixed vocabulary. No stemming,
//! fuzzy matching, or synonym expansion.

use std::collections::BTreeSet;

/// Recognized skills. Multi-word entries are matched as token phrases.
pub const KNOWN_SKILLS: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "vue",
    "angular",
    "node.js",
    "python",
    "java",
    "c++",
    "go",
    "ruby",
    "php",
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "aws",
    "gcp",
    "azure",
    "docker",
    "kubernetes",
    "linux",
    "git",
    "ci/cd",
    "machine learning",
    "data structures",
    "algorithms",
    "system design",
];

/// Characters kept inside a token besides alphanumerics ("c++", "node.js", "ci/cd").
const TOKEN_SYMBOLS: &[char] = &['+', '#', '.', '/', '-'];

/// Characters stripped from token edges ("python." → "python").
const EDGE_TRIM: &[char] = &['.', '/', '-'];

fn is_known(candidate: &str) -> bool {
    KNOWN_SKILLS.contains(&candidate)
}

/// Word count of the longest vocabulary phrase.
fn max_phrase_len() -> usize {
    KNOWN_SKILLS
        .iter()
        .map(|s| s.split(' ').count())
        .max()
        .unwrap_or(1)
}

/// Lowercases and splits text into skill-matching tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || TOKEN_SYMBOLS.contains(&c)))
        .map(|raw| raw.trim_matches(EDGE_TRIM))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts the deduplicated, sorted set of known skills mentioned in `text`.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    if text.trim().is_empty() {
        return found;
    }

    let tokens = tokenize(text);

    for token in &tokens {
        if is_known(token) {
            found.insert(token.clone());
        } else if token.contains('/') {
            // "react/vue" → try each side
            for part in token.split('/').filter(|p| is_known(p)) {
                found.insert(part.to_string());
            }
        }
    }

    for window_len in 2..=max_phrase_len() {
        for window in tokens.windows(window_len) {
            let phrase = window.join(" ");
            if is_known(&phrase) {
                found.insert(phrase);
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(text: &str) -> Vec<String> {
        extract_skills(text).into_iter().collect()
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills("   \n\t ").is_empty());
    }

    #[test]
    fn test_case_insensitive_single_tokens() {
        assert_eq!(skills("Python, Docker and AWS."), vec!["aws", "docker", "python"]);
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        assert_eq!(skills("Senior JavaScript developer"), vec!["javascript"]);
    }

    #[test]
    fn test_symbol_skills_survive_tokenization() {
        assert_eq!(
            skills("Built services in C++ and Node.js with a CI/CD pipeline."),
            vec!["c++", "ci/cd", "node.js"]
        );
    }

    #[test]
    fn test_multi_word_phrases() {
        let found = skills("Strong grasp of Data Structures, algorithms and system design.");
        assert_eq!(found, vec!["algorithms", "data structures", "system design"]);
    }

    #[test]
    fn test_phrase_split_across_lines_still_matches() {
        assert_eq!(skills("machine\nlearning"), vec!["machine learning"]);
    }

    #[test]
    fn test_phrase_parts_alone_do_not_match() {
        assert!(skills("design of the system; machine shop learning").is_empty());
    }

    #[test]
    fn test_slash_separated_alternatives() {
        assert_eq!(skills("React/Vue frontends"), vec!["react", "vue"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(skills("go go Go golang"), vec!["go"]);
    }

    #[test]
    fn test_tokenize_trims_edge_punctuation() {
        assert_eq!(tokenize("(Redis)... -linux-"), vec!["redis", "linux"]);
    }

    #[test]
    fn test_max_phrase_len_is_two_for_default_vocabulary() {
        assert_eq!(max_phrase_len(), 2);
    }
}
