//! Skill Matching — overlap, gap and percentage score between two skill lists.
//!
//! Pure and deterministic: inputs are normalized into sets, outputs are sorted.
//! The same function backs blind-spot detection (`blind_spots.rs`).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of normalized skill names: trimmed, lower-cased, deduplicated.
/// Original casing is discarded. Iteration order is ascending code-point order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn normalize(skill: &str) -> String {
        skill.trim().to_lowercase()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Skills present in both sets, sorted.
    pub fn intersection(&self, other: &SkillSet) -> Vec<String> {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// Skills in `self` that `other` lacks, sorted.
    pub fn difference(&self, other: &SkillSet) -> Vec<String> {
        self.0.difference(&other.0).cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|s| Self::normalize(s.as_ref()))
                .collect(),
        )
    }
}

/// Result of comparing a candidate skill list against a reference list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0.0 – 100.0, two decimals. 0.0 when the reference set is empty.
    #[serde(rename = "match_score")]
    pub score: f64,
    pub overlap: Vec<String>,
    pub missing: Vec<String>,
}

/// Compares `candidate` against `reference` with case-insensitive set semantics.
///
/// - overlap = candidate ∩ reference
/// - missing = reference − candidate
/// - score   = round(100 × |overlap| / |reference|, 2), or 0.0 for an empty reference
///
/// Total: every input is accepted, including empty and duplicate-laden lists.
pub fn compute_match<C, R>(candidate: C, reference: R) -> MatchResult
where
    C: IntoIterator,
    C::Item: AsRef<str>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let candidate: SkillSet = candidate.into_iter().collect();
    let reference: SkillSet = reference.into_iter().collect();

    let overlap = candidate.intersection(&reference);
    let missing = reference.difference(&candidate);

    let score = if reference.is_empty() {
        0.0
    } else {
        round_to_hundredths(overlap.len() as f64 / reference.len() as f64 * 100.0)
    };

    MatchResult {
        score,
        overlap,
        missing,
    }
}

/// Halves round to even, so 3.125 becomes 3.12 and 15.625 becomes 15.62.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_score_zero() {
        let result = compute_match(Vec::<String>::new(), Vec::<String>::new());
        assert_eq!(result.score, 0.0);
        assert!(result.overlap.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_partial_match_rounds_to_two_decimals() {
        let result = compute_match(["Python", "SQL"], ["Python", "Docker", "SQL"]);
        assert_eq!(result.score, 66.67);
        assert_eq!(result.overlap, vec!["python", "sql"]);
        assert_eq!(result.missing, vec!["docker"]);
    }

    #[test]
    fn test_halfway_scores_round_to_even() {
        let reference: Vec<String> = (0..32).map(|i| format!("s{i}")).collect();

        let result = compute_match(["s0"], &reference);
        assert_eq!(result.score, 3.12);

        let result = compute_match(["s0", "s1", "s2", "s3", "s4"], &reference);
        assert_eq!(result.score, 15.62);

        let result = compute_match(["s0", "s1", "s2"], &reference);
        assert_eq!(result.score, 9.38);
    }

    #[test]
    fn test_full_match_is_100() {
        let result = compute_match(["rust", "go"], ["Go", "RUST"]);
        assert_eq!(result.score, 100.0);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_reference_with_candidate_scores_zero() {
        let result = compute_match(["rust"], Vec::<&str>::new());
        assert_eq!(result.score, 0.0);
        assert!(result.overlap.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let result = compute_match(["SQL", "sql", "Sql"], ["sql", "SQL", "docker"]);
        assert_eq!(result.overlap, vec!["sql"]);
        assert_eq!(result.missing, vec!["docker"]);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_outer_whitespace_is_trimmed_inner_kept() {
        let result = compute_match(["  machine learning "], ["Machine Learning"]);
        assert_eq!(result.overlap, vec!["machine learning"]);

        let result = compute_match(["machinelearning"], ["machine learning"]);
        assert!(result.overlap.is_empty());
    }

    #[test]
    fn test_outputs_are_sorted() {
        let result = compute_match(["zig", "ada"], ["zig", "ada", "c", "basic"]);
        assert_eq!(result.overlap, vec!["ada", "zig"]);
        assert_eq!(result.missing, vec!["basic", "c"]);
    }

    #[test]
    fn test_overlap_and_missing_partition_reference() {
        let candidate = ["Rust", "Kafka", "python", "terraform"];
        let reference = ["rust", "PYTHON", "kubernetes", "Kafka", "aws", "rust"];
        let result = compute_match(candidate, reference);

        let overlap: BTreeSet<_> = result.overlap.iter().cloned().collect();
        let missing: BTreeSet<_> = result.missing.iter().cloned().collect();
        assert!(overlap.is_disjoint(&missing));

        let union: SkillSet = overlap.union(&missing).collect();
        let normalized_reference: SkillSet = reference.into_iter().collect();
        assert_eq!(union, normalized_reference);
    }

    #[test]
    fn test_score_is_idempotent() {
        let a = compute_match(["a", "b"], ["b", "c", "d"]);
        let b = compute_match(["a", "b"], ["b", "c", "d"]);
        assert_eq!(a, b);
        assert_eq!(a.score, 33.33);
    }

    #[test]
    fn test_serializes_score_as_match_score() {
        let json = serde_json::to_value(compute_match(["x"], ["x"])).unwrap();
        assert_eq!(json["match_score"], 100.0);
        assert_eq!(json["overlap"][0], "x");
    }

    #[test]
    fn test_skill_set_normalizes_on_collect() {
        let set: SkillSet = ["Docker", " DOCKER", "docker "].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_eq!(set, ["docker"].into_iter().collect::<SkillSet>());
    }
}
