//! Scoring Policy: maps a job description to a fit score with an ordered keyword rule list.
//!
//! Rules are evaluated in list order and the FIRST rule whose keyword occurs in the
//! job description (case-insensitive substring) decides the score. This is a
//! first-match contract, not best-match: reordering rules changes results.
//!
//! `AppState` holds an `Arc<ScoringPolicy>`; the policy is immutable after construction.

use serde::Serialize;

use crate::interview::models::FitScore;

/// A single `{keyword, score}` rule. Keywords are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRule {
    keyword: String,
    score: FitScore,
}

impl KeywordRule {
    pub fn new(keyword: &str, score: u8) -> Self {
        Self {
            keyword: keyword.trim().to_lowercase(),
            score: FitScore::new(score),
        }
    }

    #[cfg(test)]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn score(&self) -> FitScore {
        self.score
    }
}

/// Default rule order. `python` precedes `java`, and `java` precedes anything
/// that merely contains it (e.g. "javascript" scores as `java`).
const DEFAULT_RULES: &[(&str, u8)] = &[
    ("python", 40),
    ("java", 80),
    ("springboot", 70),
    ("node", 60),
    ("react", 60),
];

#[derive(Debug, Clone)]
pub struct ScoringPolicy {
    rules: Vec<KeywordRule>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::from_rules(
            DEFAULT_RULES
                .iter()
                .map(|(keyword, score)| KeywordRule::new(keyword, *score)),
        )
    }
}

impl ScoringPolicy {
    /// Builds a policy from rules in evaluation order. Rules with a blank keyword
    /// would match every input and are discarded.
    pub fn from_rules(rules: impl IntoIterator<Item = KeywordRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .filter(|r| !r.keyword.is_empty())
                .collect(),
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Scores a job description. Total: returns 0 when nothing matches,
    /// including for empty input.
    pub fn score(&self, job_description: &str) -> FitScore {
        self.first_match(job_description)
            .map(KeywordRule::score)
            .unwrap_or_default()
    }

    /// Returns the rule that decides the score, if any.
    pub fn first_match(&self, job_description: &str) -> Option<&KeywordRule> {
        if job_description.is_empty() {
            return None;
        }
        let jd_lower = job_description.to_lowercase();
        self.rules.iter().find(|r| jd_lower.contains(&r.keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_developer_scores_80() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.score("Looking for a Java developer").value(), 80);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.score("Senior REACT engineer").value(), 60);
        assert_eq!(policy.score("PyThOn scripting").value(), 40);
        assert_eq!(policy.score("SpringBoot microservices").value(), 70);
    }

    #[test]
    fn test_no_keyword_scores_zero() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.score("Experienced pastry chef").value(), 0);
    }

    #[test]
    fn test_empty_description_scores_zero() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.score("").value(), 0);
        assert!(policy.first_match("").is_none());
    }

    #[test]
    fn test_first_match_wins_over_highest() {
        // python (40) is listed before java (80)
        let policy = ScoringPolicy::default();
        assert_eq!(policy.score("Java and Python backend").value(), 40);
    }

    #[test]
    fn test_substring_match_javascript_counts_as_java() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.score("JavaScript frontend role").value(), 80);
        assert_eq!(
            policy.first_match("JavaScript frontend role").map(|r| r.keyword()),
            Some("java")
        );
    }

    #[test]
    fn test_springboot_job_hits_java_first() {
        // "springboot java": java precedes springboot in rule order
        let policy = ScoringPolicy::default();
        assert_eq!(policy.score("Java SpringBoot developer").value(), 80);
        assert_eq!(policy.score("SpringBoot developer").value(), 70);
    }

    #[test]
    fn test_custom_rule_order_is_respected() {
        let policy = ScoringPolicy::from_rules([
            KeywordRule::new("Rust", 90),
            KeywordRule::new("  ", 100),
            KeywordRule::new("go", 50),
        ]);
        assert_eq!(policy.rules().len(), 2);
        assert_eq!(policy.score("rust and go").value(), 90);
        assert_eq!(policy.score("golang only").value(), 50);
    }

    #[test]
    fn test_rule_scores_are_clamped() {
        let policy = ScoringPolicy::from_rules([KeywordRule::new("cobol", 255)]);
        assert_eq!(policy.score("COBOL maintenance").value(), 100);
    }
}
