//! Billing domain errors.

use thiserror::Error;

use crate::domain::foundation::PlanId;

/// Errors raised by the order/verification flow.
#[derive(Debug, Clone, Error)]
pub enum BillingError {
    #[error("Plan not found: {0}")]
    PlanNotFound(PlanId),

    #[error("Invalid payment provider: {0}")]
    InvalidProvider(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Payment verification failed: {reason}")]
    VerificationFailed { reason: String },

    #[error("Payment gateway error: {message}")]
    Gateway { message: String },

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl BillingError {
    pub fn plan_not_found(id: PlanId) -> Self {
        BillingError::PlanNotFound(id)
    }

    pub fn invalid_provider(name: impl Into<String>) -> Self {
        BillingError::InvalidProvider(name.into())
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        BillingError::MissingField(field.into())
    }

    pub fn verification_failed(reason: impl Into<String>) -> Self {
        BillingError::VerificationFailed {
            reason: reason.into(),
        }
    }

    pub fn gateway(message: impl Into<String>) -> Self {
        BillingError::Gateway {
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BillingError::Infrastructure(message.into())
    }

    /// Returns the human-readable message for this error.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<crate::domain::foundation::DomainError> for BillingError {
    fn from(err: crate::domain::foundation::DomainError) -> Self {
        BillingError::Infrastructure(err.to_string())
    }
}
