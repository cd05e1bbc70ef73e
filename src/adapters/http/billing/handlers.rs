//! Billing HTTP handlers.

use std::str::FromStr;
use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::billing::{
    CreateOrderCommand, CreateOrderHandler, VerifyPaymentCommand, VerifyPaymentHandler,
};
use crate::domain::billing::ProviderKind;
use crate::domain::foundation::PlanId;
use crate::ports::PaymentProof;

use super::dto::{CreateOrderRequest, VerifyPaymentRequest, VerifyPaymentResponse};

/// Shared state for billing routes.
#[derive(Clone)]
pub struct BillingState {
    pub create_order: Arc<CreateOrderHandler>,
    pub verify_payment: Arc<VerifyPaymentHandler>,
}

fn parse_plan_id(raw: &str) -> Result<PlanId, ApiError> {
    PlanId::from_str(raw)
        .map_err(|_| ApiError::bad_request("INVALID_PLAN_ID", format!("Invalid plan id: {raw}")))
}

fn parse_provider(raw: &str) -> Result<ProviderKind, ApiError> {
    ProviderKind::from_str(raw).map_err(ApiError::from)
}

/// POST /api/payments/create-order
pub async fn create_order(
    State(state): State<BillingState>,
    RequireAuth(_user): RequireAuth,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<Value>, ApiError> {
    let command = CreateOrderCommand {
        plan_id: parse_plan_id(&request.plan_id)?,
        provider: parse_provider(&request.provider)?,
    };

    let result = state.create_order.handle(command).await?;
    Ok(Json(result.order))
}

/// POST /api/payments/verify-payment
pub async fn verify_payment(
    State(state): State<BillingState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<VerifyPaymentRequest>,
) -> Result<Json<VerifyPaymentResponse>, ApiError> {
    if request.payment_id.trim().is_empty() {
        return Err(ApiError::bad_request("MISSING_FIELD", "paymentId is required"));
    }

    let command = VerifyPaymentCommand {
        user_id: user.id,
        plan_id: parse_plan_id(&request.plan_id)?,
        provider: parse_provider(&request.provider)?,
        proof: PaymentProof {
            payment_id: request.payment_id,
            order_id: request.order_id,
            signature: request.signature,
        },
    };

    let result = state.verify_payment.handle(command).await?;

    Ok(Json(VerifyPaymentResponse {
        success: true,
        message: "Payment verified and subscription activated",
        subscription: result.subscription.into(),
    }))
}
