//! Payment provider discriminant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::BillingError;

/// The external payment processors an order can be routed to.
///
/// Serves as the tag that selects a concrete `PaymentGateway`
/// implementation; the wire value is the lowercase provider name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Paypal,
    Razorpay,
}

impl ProviderKind {
    /// Returns the lowercase wire name of the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Paypal => "paypal",
            ProviderKind::Razorpay => "razorpay",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paypal" => Ok(ProviderKind::Paypal),
            "razorpay" => Ok(ProviderKind::Razorpay),
            other => Err(BillingError::invalid_provider(other)),
        }
    }
}
