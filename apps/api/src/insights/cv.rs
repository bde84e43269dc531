//! CV analysis — keyword extraction plus a fixed set of improvement suggestions.
//!
//! The latest `CvAnalysis` is kept in the shared `LastResultCache` by the handler layer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

const MAX_KEYWORDS: usize = 20;
const MIN_KEYWORD_CHARS: usize = 4;

const CV_SUGGESTIONS: &[&str] = &[
    "Add measurable achievements",
    "Include recent relevant certifications",
    "Tailor summary to target role",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvAnalysis {
    pub keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Extracts up to 20 distinct, lower-cased, sorted keywords from free text.
///
/// Tokens are split on whitespace and stripped of trailing `.`/`,`; only tokens
/// longer than three characters survive.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.trim_end_matches(['.', ',']))
        .filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS)
        .map(str::to_lowercase)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .take(MAX_KEYWORDS)
        .collect()
}

pub fn analyze_cv_text(cv_text: &str) -> CvAnalysis {
    CvAnalysis {
        keywords: extract_keywords(cv_text),
        suggestions: CV_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}
