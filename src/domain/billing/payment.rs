//! Payment history records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PaymentRecordId, SubscriptionId, UserId};

use super::ProviderKind;

/// Settlement status of a payment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// Append-only log entry, one row per completed payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentRecordId,
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
    pub provider: ProviderKind,
    pub payment_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
}

impl PaymentRecord {
    /// Creates a completed payment record for a freshly activated
    /// subscription.
    pub fn completed(
        user_id: UserId,
        subscription_id: SubscriptionId,
        provider: ProviderKind,
        payment_id: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: PaymentRecordId::new(),
            user_id,
            subscription_id,
            provider,
            payment_id: payment_id.into(),
            amount,
            currency: currency.into(),
            status: PaymentStatus::Completed,
        }
    }
}
