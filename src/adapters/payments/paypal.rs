//! PayPal payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the PayPal Checkout Orders
//! API (v2). Each call fetches a client-credentials access token; PayPal
//! tokens are cacheable but the volume here does not justify it.
//!
//! Verification captures the approved order server-side and trusts the
//! capture result: a `COMPLETED` status is proof of payment.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::PaypalConfig;
use crate::domain::billing::{ProviderKind, SubscriptionPlan};
use crate::ports::{PaymentError, PaymentGateway, PaymentProof, VerifiedPayment};

const BRAND_NAME: &str = "Bhagwat Wisdom";

/// PayPal gateway adapter.
pub struct PaypalGateway {
    client_id: String,
    client_secret: SecretString,
    api_base_url: String,
    http_client: reqwest::Client,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl PaypalGateway {
    pub fn new(config: &PaypalConfig) -> Self {
        Self {
            client_id: config.client_id.clone(),
            client_secret: SecretString::new(config.client_secret.clone()),
            api_base_url: config.base_url.clone(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Fetches a client-credentials access token.
    async fn access_token(&self) -> Result<String, PaymentError> {
        let response = self
            .http_client
            .post(format!("{}/v1/oauth2/token", self.api_base_url))
            .basic_auth(&self.client_id, Some(self.client_secret.expose_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| PaymentError::retryable("gateway_unreachable", e.to_string()))?;

        if !response.status().is_success() {
            return Err(PaymentError::new(
                "auth_failed",
                format!("PayPal token endpoint returned {}", response.status()),
            ));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            PaymentError::new("invalid_response", format!("Unparseable token response: {e}"))
        })?;

        Ok(token.access_token)
    }
}

#[async_trait]
impl PaymentGateway for PaypalGateway {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Paypal
    }

    async fn create_order(&self, plan: &SubscriptionPlan) -> Result<Value, PaymentError> {
        let token = self.access_token().await?;

        let response = self
            .http_client
            .post(format!("{}/v2/checkout/orders", self.api_base_url))
            .bearer_auth(&token)
            .json(&json!({
                "intent": "CAPTURE",
                "purchase_units": [{
                    "amount": {
                        "currency_code": plan.currency,
                        "value": plan.amount_decimal(),
                    },
                    "description": format!("{} Plan - Monthly Subscription", plan.name),
                }],
                "application_context": {
                    "brand_name": BRAND_NAME,
                    "shipping_preference": "NO_SHIPPING",
                    "user_action": "PAY_NOW",
                },
            }))
            .send()
            .await
            .map_err(|e| PaymentError::retryable("gateway_unreachable", e.to_string()))?;

        let status = response.status();
        let order: Value = response.json().await.map_err(|e| {
            PaymentError::new("invalid_response", format!("Unparseable order response: {e}"))
        })?;

        if !status.is_success() {
            let message = order["message"]
                .as_str()
                .unwrap_or("order creation rejected")
                .to_string();
            let mut err = PaymentError::new("gateway_rejected", message);
            if let Some(code) = order["name"].as_str() {
                err = err.with_provider_code(code);
            }
            return Err(err);
        }

        Ok(order)
    }

    async fn verify_payment(&self, proof: &PaymentProof) -> Result<VerifiedPayment, PaymentError> {
        let token = self.access_token().await?;

        // For PayPal the submitted payment id is the checkout order id.
        let response = self
            .http_client
            .post(format!(
                "{}/v2/checkout/orders/{}/capture",
                self.api_base_url, proof.payment_id
            ))
            .bearer_auth(&token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| PaymentError::retryable("gateway_unreachable", e.to_string()))?;

        let status = response.status();
        let capture: Value = response.json().await.map_err(|e| {
            PaymentError::new(
                "invalid_response",
                format!("Unparseable capture response: {e}"),
            )
        })?;

        if !status.is_success() {
            let message = capture["message"]
                .as_str()
                .unwrap_or("capture rejected")
                .to_string();
            return Err(PaymentError::verification_failed(message));
        }

        match capture["status"].as_str() {
            Some("COMPLETED") => Ok(VerifiedPayment {
                provider: ProviderKind::Paypal,
                payment_id: proof.payment_id.clone(),
            }),
            other => {
                tracing::warn!(order_id = %proof.payment_id, status = ?other, "capture not completed");
                Err(PaymentError::verification_failed(format!(
                    "Capture status {}",
                    other.unwrap_or("missing")
                )))
            }
        }
    }
}
