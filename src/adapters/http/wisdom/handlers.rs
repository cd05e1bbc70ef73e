//! Wisdom HTTP handlers.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::wisdom::{
    GetWisdomCommand, GetWisdomHandler, InterpretDreamCommand, InterpretDreamHandler,
    SolveProblemCommand, SolveProblemHandler, WisdomOutcome,
};
use crate::domain::wisdom::{Language, ResponseCategory};

use super::dto::{
    DreamRequest, DreamResponse, SolutionResponse, SolveRequest, WisdomRequest, WisdomResponse,
};

/// Shared state for wisdom routes.
#[derive(Clone)]
pub struct WisdomState {
    pub get_wisdom: Arc<GetWisdomHandler>,
    pub solve_problem: Arc<SolveProblemHandler>,
    pub interpret_dream: Arc<InterpretDreamHandler>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request("MISSING_FIELD", format!("{field} is required")))
}

/// POST /api/wisdom
///
/// Returns generated guidance, or `useFallback: true` when no generation
/// backend is configured. Generation failures are 500s marked retryable.
pub async fn get_wisdom(
    State(state): State<WisdomState>,
    Json(request): Json<WisdomRequest>,
) -> Result<Json<WisdomResponse>, ApiError> {
    let question = required(request.question, "question")?;
    let category = required(request.category, "category")?
        .parse::<ResponseCategory>()
        .unwrap_or(ResponseCategory::General);
    let language = Language::parse_or_default(&required(request.language, "language")?);

    let outcome = state
        .get_wisdom
        .handle(GetWisdomCommand {
            question,
            category,
            language,
        })
        .await?;

    let response = match outcome {
        WisdomOutcome::Generated { guidance } => WisdomResponse {
            status: "success",
            answer: Some(guidance),
            use_fallback: false,
        },
        WisdomOutcome::UseFallback => WisdomResponse {
            status: "success",
            answer: None,
            use_fallback: true,
        },
    };

    Ok(Json(response))
}

/// POST /api/problems/solve
///
/// Always answers: generation failures are absorbed into static fallback
/// guidance.
pub async fn solve_problem(
    State(state): State<WisdomState>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolutionResponse>, ApiError> {
    let problem = required(request.problem, "problem")?;
    let language = Language::parse_or_default(request.language.as_deref().unwrap_or(""));

    let result = state
        .solve_problem
        .handle(SolveProblemCommand { problem, language })
        .await;

    Ok(Json(SolutionResponse {
        category: result.category,
        solution: result.guidance,
        used_fallback: result.used_fallback,
    }))
}

/// POST /api/dreams/interpret
///
/// Always answers: generation failures are absorbed into the fixed
/// per-language fallback interpretation.
pub async fn interpret_dream(
    State(state): State<WisdomState>,
    Json(request): Json<DreamRequest>,
) -> Result<Json<DreamResponse>, ApiError> {
    let dream = required(request.dream, "dream")?;
    let language = Language::parse_or_default(request.language.as_deref().unwrap_or(""));

    let result = state
        .interpret_dream
        .handle(InterpretDreamCommand { dream, language })
        .await;

    Ok(Json(DreamResponse {
        interpretation: result.interpretation,
        used_fallback: result.used_fallback,
    }))
}
