//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::billing::BillingError;
use crate::ports::GenerationError;

/// An API error with a stable code and an HTTP status.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub retryable: bool,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, message)
    }

    pub fn internal(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, code, message)
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "status": "error",
            "code": self.code,
            "message": self.message,
        });
        if self.retryable {
            body["retryable"] = json!(true);
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        match &err {
            BillingError::PlanNotFound(_) => ApiError::not_found("PLAN_NOT_FOUND", err.message()),
            BillingError::InvalidProvider(_) => {
                ApiError::bad_request("INVALID_PROVIDER", err.message())
            }
            BillingError::MissingField(_) => ApiError::bad_request("MISSING_FIELD", err.message()),
            BillingError::VerificationFailed { .. } => {
                ApiError::bad_request("PAYMENT_VERIFICATION_FAILED", err.message())
            }
            BillingError::Gateway { .. } => {
                ApiError::internal("GATEWAY_ERROR", err.message()).retryable()
            }
            BillingError::Infrastructure(_) => ApiError::internal("INTERNAL_ERROR", err.message()),
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        let api = ApiError::internal("GENERATION_FAILED", err.to_string());
        if err.is_retryable() {
            api.retryable()
        } else {
            api
        }
    }
}
