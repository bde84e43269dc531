use std::sync::Arc;

use crate::cache::LastResultCache;
use crate::completion::CompletionProvider;
use crate::insights::cv::CvAnalysis;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: OpenAiCompletionClient.
    pub completion: Arc<dyn CompletionProvider>,
    /// Most recent CV analysis, served back by GET /ai/cv-analysis.
    pub cv_analysis: Arc<LastResultCache<CvAnalysis>>,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self {
            completion,
            cv_analysis: Arc::new(LastResultCache::new()),
        }
    }
}
