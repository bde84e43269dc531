use serde::{Deserialize, Serialize};

/// Summaries longer than this many words count as communicating clearly.
const DETAILED_SUMMARY_WORDS: usize = 20;
/// Summaries shorter than this many words are flagged for more technical depth.
const DEEP_SUMMARY_WORDS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub word_count: usize,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

/// Word-count heuristics over a free-text profile summary.
pub fn analyse_profile(summary: &str) -> ProfileAnalysis {
    let word_count = summary.split_whitespace().count();

    let strengths = if word_count > DETAILED_SUMMARY_WORDS {
        vec!["Clear communication".to_string(), "Domain familiarity".to_string()]
    } else {
        vec!["Concise".to_string()]
    };

    let gaps = if word_count < DEEP_SUMMARY_WORDS {
        vec!["Expand technical depth".to_string()]
    } else {
        vec![]
    };

    ProfileAnalysis {
        word_count,
        strengths,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_twenty_words_is_concise() {
        let analysis = analyse_profile(&words(20));
        assert_eq!(analysis.word_count, 20);
        assert_eq!(analysis.strengths, vec!["Concise"]);
        assert_eq!(analysis.gaps, vec!["Expand technical depth"]);
    }

    #[test]
    fn test_twenty_one_words_is_clear() {
        let analysis = analyse_profile(&words(21));
        assert!(analysis.strengths.contains(&"Clear communication".to_string()));
        assert!(analysis.strengths.contains(&"Domain familiarity".to_string()));
    }

    #[test]
    fn test_fifty_words_has_no_gaps() {
        assert!(analyse_profile(&words(50)).gaps.is_empty());
        assert_eq!(analyse_profile(&words(49)).gaps.len(), 1);
    }

    #[test]
    fn test_mixed_whitespace_counts_words() {
        let analysis = analyse_profile("  Rust\tengineer\n\nbuilding   services ");
        assert_eq!(analysis.word_count, 4);
    }

    #[test]
    fn test_empty_summary() {
        let analysis = analyse_profile("");
        assert_eq!(analysis.word_count, 0);
        assert_eq!(analysis.strengths, vec!["Concise"]);
    }
}
