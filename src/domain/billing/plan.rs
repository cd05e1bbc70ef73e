//! Subscription plan reference data.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PlanId;

/// A purchasable subscription plan.
///
/// Read-only reference data; price and currency feed the provider order
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: PlanId,
    pub name: String,
    pub price: f64,
    pub currency: String,
}

impl SubscriptionPlan {
    pub fn new(id: PlanId, name: impl Into<String>, price: f64, currency: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            currency: currency.into(),
        }
    }

    /// Plan price in the smallest currency unit (paise for INR, cents for
    /// USD), as Razorpay expects it.
    pub fn amount_minor_units(&self) -> i64 {
        (self.price * 100.0).round() as i64
    }

    /// Plan price formatted for decimal-string amounts (PayPal).
    pub fn amount_decimal(&self) -> String {
        format!("{:.2}", self.price)
    }
}
