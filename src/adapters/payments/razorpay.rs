//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the Razorpay Orders API.
//! Verification is purely local: the checkout callback signature is an
//! HMAC-SHA256 over `order_id|payment_id` keyed with the key secret.
//!
//! # Security
//!
//! - Constant-time signature comparison
//! - Key secret handled via `secrecy::SecretString`

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::RazorpayConfig;
use crate::domain::billing::{ProviderKind, SubscriptionPlan};
use crate::domain::foundation::Timestamp;
use crate::ports::{PaymentError, PaymentGateway, PaymentProof, VerifiedPayment};

type HmacSha256 = Hmac<Sha256>;

/// Razorpay gateway adapter.
pub struct RazorpayGateway {
    key_id: String,
    key_secret: SecretString,
    api_base_url: String,
    http_client: reqwest::Client,
}

impl RazorpayGateway {
    pub fn new(config: &RazorpayConfig) -> Self {
        Self {
            key_id: config.key_id.clone(),
            key_secret: SecretString::new(config.key_secret.clone()),
            api_base_url: config.base_url.clone(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Computes the checkout callback signature for an order/payment pair.
    fn expected_signature(&self, order_id: &str, payment_id: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.key_secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(format!("{order_id}|{payment_id}").as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Razorpay
    }

    async fn create_order(&self, plan: &SubscriptionPlan) -> Result<Value, PaymentError> {
        let receipt = format!("plan_{}_{}", plan.id, Timestamp::now().as_unix_millis());

        let response = self
            .http_client
            .post(format!("{}/v1/orders", self.api_base_url))
            .basic_auth(&self.key_id, Some(self.key_secret.expose_secret()))
            .json(&json!({
                "amount": plan.amount_minor_units(),
                "currency": plan.currency,
                "receipt": receipt,
                "notes": {
                    "plan_id": plan.id.to_string(),
                    "plan_name": plan.name,
                },
            }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PaymentError::retryable("gateway_unreachable", "Razorpay request timed out")
                } else {
                    PaymentError::retryable("gateway_unreachable", e.to_string())
                }
            })?;

        let status = response.status();
        let mut order: Value = response.json().await.map_err(|e| {
            PaymentError::new("invalid_response", format!("Unparseable order response: {e}"))
        })?;

        if !status.is_success() {
            let description = order["error"]["description"]
                .as_str()
                .unwrap_or("order creation rejected")
                .to_string();
            let code = order["error"]["code"].as_str().map(str::to_string);
            let mut err = PaymentError::new("gateway_rejected", description);
            if let Some(code) = code {
                err = err.with_provider_code(code);
            }
            return Err(err);
        }

        // The checkout client needs the public key and plan details
        // alongside the raw order.
        if let Some(obj) = order.as_object_mut() {
            obj.insert("key_id".to_string(), json!(self.key_id));
            obj.insert(
                "plan_details".to_string(),
                json!({
                    "name": plan.name,
                    "price": plan.price,
                    "currency": plan.currency,
                }),
            );
        }

        Ok(order)
    }

    async fn verify_payment(&self, proof: &PaymentProof) -> Result<VerifiedPayment, PaymentError> {
        let order_id = proof
            .order_id
            .as_deref()
            .ok_or_else(|| PaymentError::verification_failed("Missing order id"))?;
        let signature = proof
            .signature
            .as_deref()
            .ok_or_else(|| PaymentError::verification_failed("Missing signature"))?;

        let expected = self.expected_signature(order_id, &proof.payment_id);

        if expected.as_bytes().ct_eq(signature.as_bytes()).unwrap_u8() != 1 {
            tracing::warn!(order_id, "Razorpay signature mismatch");
            return Err(PaymentError::verification_failed("Invalid signature"));
        }

        Ok(VerifiedPayment {
            provider: ProviderKind::Razorpay,
            payment_id: proof.payment_id.clone(),
        })
    }
}
