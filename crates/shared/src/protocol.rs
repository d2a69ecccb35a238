use serde::{Deserialize, Serialize};

/// Body of a successful analysis response.
///
/// Replaced wholesale by each successful call; never merged with a previous
/// report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub match_score: f64,
    pub summary: String,
    pub missing_keywords: Vec<String>,
}

impl AnalysisReport {
    /// The score is documented as a 0-100 percentage; anything outside that
    /// range means the body cannot be trusted.
    pub fn score_in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.match_score)
    }
}

#[derive(Debug, Deserialize)]
struct DetailErrorBody {
    detail: String,
}

#[derive(Debug, Deserialize)]
struct WrappedErrorBody {
    error: WrappedErrorMessage,
}

#[derive(Debug, Deserialize)]
struct WrappedErrorMessage {
    message: String,
}

/// Best-effort extraction of a human-readable message from an error response
/// body. Recognizes `{"detail": ...}` and `{"error": {"message": ...}}`;
/// anything else is left to the caller as raw text.
pub fn server_error_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<DetailErrorBody>(body) {
        return Some(parsed.detail);
    }
    if let Ok(parsed) = serde_json::from_str::<WrappedErrorBody>(body) {
        return Some(parsed.error.message);
    }
    None
}
