//! Wisdom route table.

use axum::{routing::post, Router};

use super::handlers::{get_wisdom, interpret_dream, solve_problem, WisdomState};

pub fn routes(state: WisdomState) -> Router {
    Router::new()
        .route("/api/wisdom", post(get_wisdom))
        .route("/api/problems/solve", post(solve_problem))
        .route("/api/dreams/interpret", post(interpret_dream))
        .with_state(state)
}
