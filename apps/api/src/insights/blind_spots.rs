//! Blind-spot detection: skills a role expects that the candidate does not list.

use serde::{Deserialize, Serialize};

use crate::insights::matching::compute_match;

/// Expected skills per role, keyed by lower-cased role name.
const ROLE_EXPECTATIONS: &[(&str, &[&str])] = &[(
    "data scientist",
    &["python", "statistics", "ml", "docker", "sql"],
)];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlindSpotReport {
    pub blind_spots: Vec<String>,
    /// One "Study <skill>" line per blind spot, same order.
    pub recommendations: Vec<String>,
}

/// Looks up the skills expected for `role` (case-insensitive). Unknown roles expect nothing.
pub fn expectations_for(role: &str) -> &'static [&'static str] {
    let role = role.trim().to_lowercase();
    ROLE_EXPECTATIONS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}

/// Reports the expected skills for `target_role` missing from `known_skills`, sorted.
pub fn analyze_blind_spots<S: AsRef<str>>(
    known_skills: &[S],
    target_role: &str,
) -> BlindSpotReport {
    let expected = expectations_for(target_role);
    let blind_spots = compute_match(known_skills, expected).missing;
    let recommendations = blind_spots.iter().map(|s| format!("Study {s}")).collect();

    BlindSpotReport {
        blind_spots,
        recommendations,
    }
}
