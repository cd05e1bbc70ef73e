//! User subscription records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlanId, SubscriptionId, Timestamp, UserId};

use super::ProviderKind;

/// Lifecycle status of a subscription.
///
/// This flow only ever creates `Active` rows; the other states exist for
/// rows managed outside the payment path (expiry sweeps, support tooling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Expired,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Cancelled => "cancelled",
            SubscriptionStatus::Expired => "expired",
        }
    }
}

/// A subscription created from one verified payment.
///
/// Created once per successful verification and not mutated afterwards in
/// this flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSubscription {
    pub id: SubscriptionId,
    pub user_id: UserId,
    pub plan_id: PlanId,
    pub provider: ProviderKind,
    /// The provider's payment identifier (PayPal order id or Razorpay
    /// payment id).
    pub payment_id: String,
    pub status: SubscriptionStatus,
    pub current_period_start: Timestamp,
    pub current_period_end: Timestamp,
}

impl UserSubscription {
    /// Creates an active subscription covering one calendar month from `now`.
    pub fn activated(
        user_id: UserId,
        plan_id: PlanId,
        provider: ProviderKind,
        payment_id: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: SubscriptionId::new(),
            user_id,
            plan_id,
            provider,
            payment_id: payment_id.into(),
            status: SubscriptionStatus::Active,
            current_period_start: now,
            current_period_end: now.add_months(1),
        }
    }
}
