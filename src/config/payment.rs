//! Payment provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration. Each provider is independently optional; at
/// least one must be configured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    pub paypal: Option<PaypalConfig>,
    pub razorpay: Option<RazorpayConfig>,
}

/// PayPal REST API credentials
#[derive(Debug, Clone, Deserialize)]
pub struct PaypalConfig {
    pub client_id: String,
    pub client_secret: String,

    /// API base; defaults to the sandbox host
    #[serde(default = "default_paypal_base_url")]
    pub base_url: String,
}

/// Razorpay API credentials
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: String,

    /// API base; Razorpay has no separate sandbox host, test keys select
    /// test mode
    #[serde(default = "default_razorpay_base_url")]
    pub base_url: String,
}

impl PaymentConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.paypal.is_none() && self.razorpay.is_none() {
            return Err(ValidationError::NoPaymentProviderConfigured);
        }
        if let Some(paypal) = &self.paypal {
            if paypal.client_id.is_empty() {
                return Err(ValidationError::MissingRequired("PAYPAL_CLIENT_ID"));
            }
            if paypal.client_secret.is_empty() {
                return Err(ValidationError::MissingRequired("PAYPAL_CLIENT_SECRET"));
            }
        }
        if let Some(razorpay) = &self.razorpay {
            if razorpay.key_id.is_empty() {
                return Err(ValidationError::MissingRequired("RAZORPAY_KEY_ID"));
            }
            if razorpay.key_secret.is_empty() {
                return Err(ValidationError::MissingRequired("RAZORPAY_KEY_SECRET"));
            }
            if !razorpay.key_id.starts_with("rzp_") {
                return Err(ValidationError::InvalidRazorpayKeyId);
            }
        }
        Ok(())
    }
}

impl PaypalConfig {
    pub fn is_sandbox(&self) -> bool {
        self.base_url.contains("sandbox")
    }
}

fn default_paypal_base_url() -> String {
    "https://api-m.sandbox.paypal.com".to_string()
}

fn default_razorpay_base_url() -> String {
    "https://api.razorpay.com".to_string()
}
