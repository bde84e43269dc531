use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthInsights {
    pub current_level: String,
    pub roadmap: Vec<String>,
    pub goal_count: usize,
}

/// One milestone per goal, in the order given.
pub fn generate_growth_insights<S: AsRef<str>>(
    current_level: &str,
    goals: &[S],
) -> GrowthInsights {
    let roadmap = goals
        .iter()
        .map(|goal| format!("Milestone: progress toward {}", goal.as_ref()))
        .collect();

    GrowthInsights {
        current_level: current_level.to_string(),
        roadmap,
        goal_count: goals.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadmap_preserves_goal_order() {
        let insights = generate_growth_insights("junior", &["Learn Rust", "Ship a service"]);
        assert_eq!(insights.current_level, "junior");
        assert_eq!(insights.goal_count, 2);
        assert_eq!(
            insights.roadmap,
            vec![
                "Milestone: progress toward Learn Rust",
                "Milestone: progress toward Ship a service",
            ]
        );
    }

    #[test]
    fn test_no_goals() {
        let insights = generate_growth_insights::<String>("senior", &[]);
        assert_eq!(insights.goal_count, 0);
        assert!(insights.roadmap.is_empty());
    }

    #[test]
    fn test_duplicate_goals_are_kept() {
        let insights = generate_growth_insights("mid", &["SQL", "SQL"]);
        assert_eq!(insights.goal_count, 2);
        assert_eq!(insights.roadmap[0], insights.roadmap[1]);
    }
}
