//! Static content HTTP handlers.

use axum::{extract::Path, Json};
use chrono::{Datelike, Utc};
use serde_json::{json, Value};

use crate::adapters::http::error::ApiError;
use crate::domain::content::{mantra_for_mood, verse_for_day, Mood};

/// GET /api/verses/daily
///
/// The verse rotates with the UTC day of year, so every caller sees the
/// same verse on the same day.
pub async fn daily_verse() -> Json<Value> {
    let day_of_year = Utc::now().ordinal();
    let verse = verse_for_day(day_of_year);

    Json(json!({
        "status": "success",
        "verse": verse,
    }))
}

/// GET /api/mantras/{mood}
pub async fn mantra_by_mood(Path(mood): Path<String>) -> Result<Json<Value>, ApiError> {
    let mood: Mood = mood
        .parse()
        .map_err(|_| ApiError::not_found("UNKNOWN_MOOD", format!("Unknown mood: {mood}")))?;

    let mantra = mantra_for_mood(mood);

    Ok(Json(json!({
        "status": "success",
        "mantra": mantra,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn daily_verse_is_stable_within_a_day() {
        let first = daily_verse().await;
        let second = daily_verse().await;
        assert_eq!(first.0["verse"], second.0["verse"]);
        assert_eq!(first.0["status"], "success");
    }

    #[tokio::test]
    async fn known_mood_returns_its_mantra() {
        let response = mantra_by_mood(Path("anxious".to_string())).await.unwrap();
        assert_eq!(response.0["mantra"]["mood"], "anxious");
    }

    #[tokio::test]
    async fn unknown_mood_is_a_404() {
        let err = mantra_by_mood(Path("serene".to_string())).await.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
    }
}
