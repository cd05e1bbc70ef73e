//! Wisdom request/response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::wisdom::ResponseCategory;

/// Body for the generate-or-signal-fallback flow. All three fields are
/// required; unknown category or language values resolve to defaults.
#[derive(Debug, Deserialize)]
pub struct WisdomRequest {
    pub question: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WisdomResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub use_fallback: bool,
}

/// Body for the never-fail solve flow; the category is inferred from the
/// problem text.
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    pub problem: Option<String>,
    /// "english" or "hindi"; anything else falls back to English.
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionResponse {
    pub category: ResponseCategory,
    pub solution: String,
    pub used_fallback: bool,
}

/// Body for the never-fail dream interpretation flow.
#[derive(Debug, Deserialize)]
pub struct DreamRequest {
    pub dream: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamResponse {
    pub interpretation: String,
    pub used_fallback: bool,
}
