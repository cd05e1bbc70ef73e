//! Integration tests for the payment and wisdom HTTP surface.
//!
//! Exercises the full router with mock ports: auth gating, order creation
//! passthrough, the verification flow's persistence sequence, and the
//! fallback behavior of the wisdom endpoints.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use bhagwat_wisdom::adapters::auth::MockSessionValidator;
use bhagwat_wisdom::adapters::http::middleware::AuthState;
use bhagwat_wisdom::adapters::http::{build_router, BillingState, WisdomState};
use bhagwat_wisdom::application::handlers::billing::{
    CreateOrderHandler, GatewaySet, VerifyPaymentHandler,
};
use bhagwat_wisdom::application::handlers::wisdom::{
    GetWisdomHandler, InterpretDreamHandler, SolveProblemHandler,
};
use bhagwat_wisdom::domain::billing::{
    PaymentRecord, ProviderKind, SubscriptionPlan, UserSubscription,
};
use bhagwat_wisdom::domain::foundation::{
    AuthenticatedUser, DomainError, PlanId, UserId,
};
use bhagwat_wisdom::domain::profile::Profile;
use bhagwat_wisdom::ports::{
    GenerationError, PaymentError, PaymentGateway, PaymentHistoryStore, PaymentProof, PlanReader,
    ProfileRepository, SubscriptionRepository, VerifiedPayment, WisdomGenerator,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct MockPlanReader {
    plan: SubscriptionPlan,
}

#[async_trait]
impl PlanReader for MockPlanReader {
    async fn find_plan(&self, id: &PlanId) -> Result<Option<SubscriptionPlan>, DomainError> {
        if *id == self.plan.id {
            Ok(Some(self.plan.clone()))
        } else {
            Ok(None)
        }
    }
}

/// Gateway that accepts exactly one signature and counts its calls.
struct MockGateway {
    kind: ProviderKind,
    accepted_signature: String,
    verify_calls: AtomicUsize,
}

impl MockGateway {
    fn razorpay(accepted_signature: &str) -> Self {
        Self {
            kind: ProviderKind::Razorpay,
            accepted_signature: accepted_signature.to_string(),
            verify_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    fn provider(&self) -> ProviderKind {
        self.kind
    }

    async fn create_order(&self, plan: &SubscriptionPlan) -> Result<Value, PaymentError> {
        Ok(json!({
            "id": "order_test",
            "amount": plan.amount_minor_units(),
            "currency": plan.currency,
            "key_id": "rzp_test_abc",
        }))
    }

    async fn verify_payment(&self, proof: &PaymentProof) -> Result<VerifiedPayment, PaymentError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        if proof.signature.as_deref() == Some(self.accepted_signature.as_str()) {
            Ok(VerifiedPayment {
                provider: self.kind,
                payment_id: proof.payment_id.clone(),
            })
        } else {
            Err(PaymentError::verification_failed("Invalid signature"))
        }
    }
}

#[derive(Default)]
struct MockStore {
    subscriptions: Mutex<Vec<UserSubscription>>,
    payments: Mutex<Vec<PaymentRecord>>,
    premium: Mutex<Vec<UserId>>,
}

#[async_trait]
impl SubscriptionRepository for MockStore {
    async fn insert(&self, subscription: &UserSubscription) -> Result<(), DomainError> {
        self.subscriptions.lock().unwrap().push(subscription.clone());
        Ok(())
    }
}

#[async_trait]
impl PaymentHistoryStore for MockStore {
    async fn record(&self, payment: &PaymentRecord) -> Result<(), DomainError> {
        self.payments.lock().unwrap().push(payment.clone());
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for MockStore {
    async fn find_by_id(&self, _id: &UserId) -> Result<Option<Profile>, DomainError> {
        Ok(None)
    }

    async fn mark_premium(&self, id: &UserId) -> Result<(), DomainError> {
        self.premium.lock().unwrap().push(*id);
        Ok(())
    }
}

struct StubGenerator(Result<String, GenerationError>);

#[async_trait]
impl WisdomGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.0.clone()
    }
}

struct TestApp {
    router: axum::Router,
    plan_id: PlanId,
    gateway: Arc<MockGateway>,
    store: Arc<MockStore>,
    user_id: UserId,
}

fn test_app(generator: StubGenerator) -> TestApp {
    let plan = SubscriptionPlan::new(PlanId::new(), "Premium", 499.0, "INR");
    let plan_id = plan.id;

    let gateway = Arc::new(MockGateway::razorpay("good-signature"));
    let store = Arc::new(MockStore::default());
    let plans = Arc::new(MockPlanReader { plan });
    let gateways = GatewaySet::new(vec![gateway.clone()]);

    let billing_state = BillingState {
        create_order: Arc::new(CreateOrderHandler::new(plans.clone(), gateways.clone())),
        verify_payment: Arc::new(VerifyPaymentHandler::new(
            plans,
            gateways,
            store.clone(),
            store.clone(),
            store.clone(),
        )),
    };

    let generator = Arc::new(generator);
    let wisdom_state = WisdomState {
        get_wisdom: Arc::new(GetWisdomHandler::new(generator.clone())),
        solve_problem: Arc::new(SolveProblemHandler::new(generator.clone())),
        interpret_dream: Arc::new(InterpretDreamHandler::new(generator)),
    };

    let user_id = UserId::new();
    let user = AuthenticatedUser::new(user_id, "seeker@example.com", None);
    let auth_state: AuthState =
        Arc::new(MockSessionValidator::new().with_user("good-token", user));

    let router = build_router(
        billing_state,
        wisdom_state,
        auth_state,
        Duration::from_secs(5),
    );

    TestApp {
        router,
        plan_id,
        gateway,
        store,
        user_id,
    }
}

fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn verify_body(app: &TestApp, signature: &str) -> Value {
    json!({
        "planId": app.plan_id.to_string(),
        "provider": "razorpay",
        "paymentId": "pay_1",
        "orderId": "order_test",
        "signature": signature,
    })
}

// =============================================================================
// Auth gating
// =============================================================================

#[tokio::test]
async fn payment_routes_require_a_bearer_token() {
    let app = test_app(StubGenerator(Err(GenerationError::NotConfigured)));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/payments/verify-payment",
            None,
            verify_body(&app, "good-signature"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    // rejected before the gateway was consulted
    assert_eq!(app.gateway.verify_calls.load(Ordering::SeqCst), 0);
    assert!(app.store.subscriptions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_tokens_are_rejected_with_401() {
    let app = test_app(StubGenerator(Err(GenerationError::NotConfigured)));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/payments/verify-payment",
            Some("stale-token"),
            verify_body(&app, "good-signature"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.gateway.verify_calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Order creation
// =============================================================================

#[tokio::test]
async fn create_order_passes_the_provider_payload_through() {
    let app = test_app(StubGenerator(Err(GenerationError::NotConfigured)));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/payments/create-order",
            Some("good-token"),
            json!({ "planId": app.plan_id.to_string(), "provider": "razorpay" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], "order_test");
    assert_eq!(body["amount"], 49900);
    assert_eq!(body["key_id"], "rzp_test_abc");
}

#[tokio::test]
async fn unknown_provider_is_a_400() {
    let app = test_app(StubGenerator(Err(GenerationError::NotConfigured)));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/payments/create-order",
            Some("good-token"),
            json!({ "planId": app.plan_id.to_string(), "provider": "stripe" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_plan_is_a_404() {
    let app = test_app(StubGenerator(Err(GenerationError::NotConfigured)));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/payments/create-order",
            Some("good-token"),
            json!({ "planId": PlanId::new().to_string(), "provider": "razorpay" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Payment verification
// =============================================================================

#[tokio::test]
async fn verified_payment_activates_a_subscription() {
    let app = test_app(StubGenerator(Err(GenerationError::NotConfigured)));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/payments/verify-payment",
            Some("good-token"),
            verify_body(&app, "good-signature"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Payment verified and subscription activated");
    assert_eq!(body["subscription"]["status"], "active");
    assert_eq!(body["subscription"]["provider"], "razorpay");

    let subscriptions = app.store.subscriptions.lock().unwrap();
    assert_eq!(subscriptions.len(), 1);
    assert_eq!(subscriptions[0].user_id, app.user_id);
    assert_eq!(subscriptions[0].payment_id, "pay_1");

    let payments = app.store.payments.lock().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount, 499.0);

    assert_eq!(app.store.premium.lock().unwrap().as_slice(), &[app.user_id]);
}

#[tokio::test]
async fn bad_signature_is_a_400_and_persists_nothing() {
    let app = test_app(StubGenerator(Err(GenerationError::NotConfigured)));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/payments/verify-payment",
            Some("good-token"),
            verify_body(&app, "forged-signature"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("Invalid signature"));

    assert!(app.store.subscriptions.lock().unwrap().is_empty());
    assert!(app.store.payments.lock().unwrap().is_empty());
    assert!(app.store.premium.lock().unwrap().is_empty());
}

// =============================================================================
// Wisdom endpoints
// =============================================================================

#[tokio::test]
async fn unconfigured_backend_signals_fallback_with_200() {
    let app = test_app(StubGenerator(Err(GenerationError::NotConfigured)));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/wisdom",
            None,
            json!({ "question": "I am anxious", "category": "anxiety", "language": "english" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["useFallback"], true);
    assert!(body.get("answer").is_none());
}

#[tokio::test]
async fn generated_guidance_is_returned_as_the_answer() {
    let app = test_app(StubGenerator(Ok("Act without attachment.".to_string())));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/wisdom",
            None,
            json!({ "question": "I fear failure", "category": "career", "language": "english" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["answer"], "Act without attachment.");
    assert_eq!(body["useFallback"], false);
}

#[tokio::test]
async fn generation_failure_is_a_retryable_500() {
    let app = test_app(StubGenerator(Err(GenerationError::provider("upstream 503"))));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/wisdom",
            None,
            json!({ "question": "I am anxious", "category": "anxiety", "language": "english" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["retryable"], true);
}

#[tokio::test]
async fn missing_question_is_a_400() {
    let app = test_app(StubGenerator(Ok("guidance".to_string())));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/wisdom",
            None,
            json!({ "question": "  ", "category": "anxiety", "language": "english" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn solve_endpoint_answers_even_when_generation_fails() {
    let app = test_app(StubGenerator(Err(GenerationError::Timeout)));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/problems/solve",
            None,
            json!({ "problem": "my marriage is struggling", "language": "hindi" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["usedFallback"], true);
    assert_eq!(body["category"], "relationships");
    assert!(!body["solution"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn dream_interpretation_answers_even_when_generation_fails() {
    let app = test_app(StubGenerator(Err(GenerationError::Timeout)));

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/dreams/interpret",
            None,
            json!({ "dream": "I was flying over a river", "language": "english" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["usedFallback"], true);
    assert!(!body["interpretation"].as_str().unwrap().is_empty());
}

// =============================================================================
// Content and health
// =============================================================================

#[tokio::test]
async fn daily_verse_and_health_are_public() {
    let app = test_app(StubGenerator(Err(GenerationError::NotConfigured)));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/verses/daily")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["verse"]["chapter"].as_u64().unwrap() > 0);

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn mantra_lookup_by_mood() {
    let app = test_app(StubGenerator(Err(GenerationError::NotConfigured)));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/mantras/peaceful")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["mantra"]["mood"], "peaceful");

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/mantras/serene")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
