//! Billing request/response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::billing::{ProviderKind, SubscriptionStatus, UserSubscription};
use crate::domain::foundation::Timestamp;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub plan_id: String,
    pub provider: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub plan_id: String,
    pub provider: String,
    /// PayPal order id or Razorpay payment id.
    pub payment_id: String,
    /// Razorpay order id; unused for PayPal.
    pub order_id: Option<String>,
    /// Razorpay checkout signature; unused for PayPal.
    pub signature: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub message: &'static str,
    pub subscription: SubscriptionDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDto {
    pub id: String,
    pub plan_id: String,
    pub provider: ProviderKind,
    pub status: SubscriptionStatus,
    pub current_period_start: Timestamp,
    pub current_period_end: Timestamp,
}

impl From<UserSubscription> for SubscriptionDto {
    fn from(sub: UserSubscription) -> Self {
        Self {
            id: sub.id.to_string(),
            plan_id: sub.plan_id.to_string(),
            provider: sub.provider,
            status: sub.status,
            current_period_start: sub.current_period_start,
            current_period_end: sub.current_period_end,
        }
    }
}
