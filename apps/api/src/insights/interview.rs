//! Interview simulator — canned, role-interpolated questions with a difficulty multiplier.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DIFFICULTY: &str = "medium";
pub const DEFAULT_QUESTION_COUNT: i64 = 5;

/// Complexity multiplier per difficulty label. Unknown labels fall back to 1.0.
const DIFFICULTY_MULTIPLIERS: &[(&str, f64)] = &[("easy", 0.8), ("medium", 1.0), ("hard", 1.2)];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSimulation {
    pub questions: Vec<String>,
    pub difficulty: String,
    pub complexity_multiplier: f64,
}

fn question_templates(role: &str) -> [String; 5] {
    [
        format!("Describe a challenge you faced in {role} and how you solved it."),
        format!("How do you keep your {role} skills up to date?"),
        format!("Explain a recent project related to {role}."),
        format!("What would you improve in your last {role} project?"),
        format!("How do you handle tight deadlines in {role}?"),
    ]
}

pub fn complexity_multiplier(difficulty: &str) -> f64 {
    DIFFICULTY_MULTIPLIERS
        .iter()
        .find(|(label, _)| *label == difficulty)
        .map(|(_, m)| *m)
        .unwrap_or(1.0)
}

/// Returns the first `min(question_count, 5)` templates. Counts of zero or below yield none.
pub fn simulate_interview(
    role: &str,
    difficulty: &str,
    question_count: i64,
) -> InterviewSimulation {
    let take = usize::try_from(question_count).unwrap_or(0);
    let questions = question_templates(role).into_iter().take(take).collect();

    InterviewSimulation {
        questions,
        difficulty: difficulty.to_string(),
        complexity_multiplier: complexity_multiplier(difficulty),
    }
}
