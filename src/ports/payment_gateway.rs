//! Payment gateway port.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::billing::{ProviderKind, SubscriptionPlan};

/// Error from a payment gateway operation.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct PaymentError {
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// Provider-specific code if one was returned.
    pub provider_code: Option<String>,
    /// Whether retrying the same call may succeed.
    pub retryable: bool,
}

impl PaymentError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            provider_code: None,
            retryable: false,
        }
    }

    pub fn retryable(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            retryable: true,
            ..Self::new(code, message)
        }
    }

    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Signature or capture checks failed; the payment must not be trusted.
    pub fn verification_failed(message: impl Into<String>) -> Self {
        Self::new("verification_failed", message)
    }
}

/// Proof of payment submitted by the client for verification.
///
/// Field meaning varies by provider: for an order-capture flow `payment_id`
/// is the provider order id; for a signature flow `order_id` and `signature`
/// accompany the payment id.
#[derive(Debug, Clone)]
pub struct PaymentProof {
    pub payment_id: String,
    pub order_id: Option<String>,
    pub signature: Option<String>,
}

/// A payment the gateway has accepted as genuine.
#[derive(Debug, Clone)]
pub struct VerifiedPayment {
    pub provider: ProviderKind,
    /// Provider-side id recorded against the subscription.
    pub payment_id: String,
}

/// A provider-specific payment backend.
///
/// `create_order` returns the raw provider payload because each provider's
/// checkout client consumes a different shape; the HTTP layer passes it
/// through untouched.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    fn provider(&self) -> ProviderKind;

    async fn create_order(&self, plan: &SubscriptionPlan) -> Result<Value, PaymentError>;

    async fn verify_payment(&self, proof: &PaymentProof) -> Result<VerifiedPayment, PaymentError>;
}
