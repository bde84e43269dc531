//! Axum route handlers for the `/ai/*` insight endpoints.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::insights::blind_spots::{analyze_blind_spots, BlindSpotReport};
use crate::insights::cv::{analyze_cv_text, CvAnalysis};
use crate::insights::growth::{generate_growth_insights, GrowthInsights};
use crate::insights::interview::{
    simulate_interview, InterviewSimulation, DEFAULT_DIFFICULTY, DEFAULT_QUESTION_COUNT,
};
use crate::insights::matching::{compute_match, MatchResult};
use crate::insights::profile::{analyse_profile, ProfileAnalysis};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub candidate_skills: Vec<String>,
    pub job_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BlindSpotsRequest {
    pub skills: Vec<String>,
    pub target_role: String,
}

#[derive(Debug, Deserialize)]
pub struct CvAnalysisRequest {
    pub cv_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileAnalysisRequest {
    pub profile_summary: String,
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}

fn default_question_count() -> i64 {
    DEFAULT_QUESTION_COUNT
}

#[derive(Debug, Deserialize)]
pub struct InterviewSimRequest {
    pub role: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_question_count")]
    pub questions: i64,
}

#[derive(Debug, Deserialize)]
pub struct GrowthInsightsRequest {
    pub current_level: String,
    pub goals: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /ai/match
pub async fn handle_match(Json(req): Json<MatchRequest>) -> Json<MatchResult> {
    let result = compute_match(&req.candidate_skills, &req.job_skills);
    debug!(
        "Skill match: score={}, overlap={}, missing={}",
        result.score,
        result.overlap.len(),
        result.missing.len()
    );
    Json(result)
}

/// POST /ai/blind-spots
pub async fn handle_blind_spots(Json(req): Json<BlindSpotsRequest>) -> Json<BlindSpotReport> {
    Json(analyze_blind_spots(&req.skills, &req.target_role))
}

/// POST /ai/cv-analysis
///
/// Extracts keywords and replaces the cached latest analysis.
pub async fn handle_cv_analysis(
    State(state): State<AppState>,
    Json(req): Json<CvAnalysisRequest>,
) -> Json<CvAnalysis> {
    let analysis = analyze_cv_text(&req.cv_text);
    debug!("CV analysis: {} keywords", analysis.keywords.len());
    state.cv_analysis.put(analysis.clone());
    Json(analysis)
}

/// GET /ai/cv-analysis
///
/// Returns the most recent analysis, or 404 if none has been run since startup.
pub async fn handle_latest_cv_analysis(
    State(state): State<AppState>,
) -> Result<Json<CvAnalysis>, AppError> {
    let latest = state
        .cv_analysis
        .get()
        .map_err(|_| AppError::NotFound("No CV analysis yet".to_string()))?;
    Ok(Json(CvAnalysis::clone(&latest)))
}

/// POST /ai/analyse-profile
pub async fn handle_analyse_profile(
    Json(req): Json<ProfileAnalysisRequest>,
) -> Json<ProfileAnalysis> {
    Json(analyse_profile(&req.profile_summary))
}

/// POST /ai/interview-simulator
pub async fn handle_interview_simulator(
    Json(req): Json<InterviewSimRequest>,
) -> Json<InterviewSimulation> {
    Json(simulate_interview(&req.role, &req.difficulty, req.questions))
}

/// POST /ai/growth-insights
pub async fn handle_growth_insights(
    Json(req): Json<GrowthInsightsRequest>,
) -> Json<GrowthInsights> {
    Json(generate_growth_insights(&req.current_level, &req.goals))
}
