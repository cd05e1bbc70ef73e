//! Static content route table.

use axum::{routing::get, Router};

use super::handlers::{daily_verse, mantra_by_mood};

pub fn routes() -> Router {
    Router::new()
        .route("/api/verses/daily", get(daily_verse))
        .route("/api/mantras/:mood", get(mantra_by_mood))
}
