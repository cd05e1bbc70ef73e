//! Application router assembly.

use std::time::Duration;

use axum::{middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::billing::{self, BillingState};
use super::content;
use super::middleware::{auth_middleware, AuthState};
use super::wisdom::{self, WisdomState};

/// Builds the full application router.
///
/// Payment routes sit behind the auth middleware; wisdom and content routes
/// are public. CORS is permissive: the API serves browser clients on
/// arbitrary origins and bearer tokens carry the authority.
pub fn build_router(
    billing_state: BillingState,
    wisdom_state: WisdomState,
    auth_state: AuthState,
    request_timeout: Duration,
) -> Router {
    let payment_routes = billing::routes(billing_state)
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .merge(payment_routes)
        .merge(wisdom::routes(wisdom_state))
        .merge(content::routes())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
