//! Billing route table.

use axum::{routing::post, Router};

use super::handlers::{create_order, verify_payment, BillingState};

pub fn routes(state: BillingState) -> Router {
    Router::new()
        .route("/api/payments/create-order", post(create_order))
        .route("/api/payments/verify-payment", post(verify_payment))
        .with_state(state)
}
