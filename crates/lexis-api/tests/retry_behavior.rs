//! Retry classification against a live local server.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use lexis_api::{ApiError, RetryPolicy};
use serde_json::{Value, json};

use common::{client, fast_retry, spawn};

#[derive(Clone, Default)]
struct Counter(Arc<AtomicU32>);

impl Counter {
    fn hit(&self) -> u32 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn calls(&self) -> u32 {
        self.0.load(Ordering::SeqCst)
    }
}

async fn always_500(State(counter): State<Counter>) -> (StatusCode, Json<Value>) {
    counter.hit();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"detail": "database unavailable"})),
    )
}

async fn always_404(State(counter): State<Counter>) -> (StatusCode, Json<Value>) {
    counter.hit();
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Invalid or expired token"})))
}

async fn fails_twice(State(counter): State<Counter>) -> (StatusCode, Json<Value>) {
    if counter.hit() <= 2 {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"detail": "warming up"})))
    } else {
        (StatusCode::OK, Json(json!({"message": "sent"})))
    }
}

fn app(counter: &Counter) -> Router {
    Router::new()
        .route("/api/v1/auth/password-reset/request", post(always_500))
        .route(
            "/api/v1/auth/password-reset/validate-token/{token}",
            get(always_404),
        )
        .route("/api/v1/auth/password-reset/confirm", post(fails_twice))
        .with_state(counter.clone())
}

#[tokio::test]
async fn server_errors_use_every_attempt() {
    let counter = Counter::default();
    let base = spawn(app(&counter)).await;
    let api = client(&base, None, fast_retry(3));

    let err = api.request_password_reset("scribe@example.com").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "API error (500): database unavailable");
    assert_eq!(counter.calls(), 3);
}

#[tokio::test]
async fn attempt_limit_follows_policy() {
    let counter = Counter::default();
    let base = spawn(app(&counter)).await;
    let api = client(&base, None, fast_retry(2));

    let _ = api.request_password_reset("scribe@example.com").await;
    assert_eq!(counter.calls(), 2);

    let single = client(&base, None, RetryPolicy::none());
    let _ = single.request_password_reset("scribe@example.com").await;
    assert_eq!(counter.calls(), 3);
}

#[tokio::test]
async fn large_attempt_counts_are_capped_at_three() {
    for max_attempts in [5, 10] {
        let counter = Counter::default();
        let base = spawn(app(&counter)).await;
        let api = client(&base, None, fast_retry(max_attempts));

        let _ = api.request_password_reset("scribe@example.com").await;
        assert_eq!(counter.calls(), 3, "max_attempts = {max_attempts}");
    }
}

#[tokio::test]
async fn client_errors_stop_after_one_call() {
    let counter = Counter::default();
    let base = spawn(app(&counter)).await;
    let api = client(&base, None, fast_retry(3));

    let err = api.validate_reset_token("stale").await.unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(counter.calls(), 1);
}

#[tokio::test]
async fn recovers_after_transient_failures() {
    let counter = Counter::default();
    let base = spawn(app(&counter)).await;
    let api = client(&base, None, fast_retry(3));

    let ack = api.confirm_password_reset("fresh", "tabula12").await.unwrap();
    assert_eq!(ack.message, "sent");
    assert_eq!(counter.calls(), 3);
}

#[tokio::test]
async fn connection_refused_is_retried_then_returned() {
    // Bind and drop to get a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = client(&format!("http://127.0.0.1:{port}"), None, fast_retry(3));

    let err = api.request_password_reset("scribe@example.com").await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
    assert!(err.is_retryable());
}
