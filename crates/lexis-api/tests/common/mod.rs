//! Local backend stand-in served by axum on an ephemeral port.

use std::time::Duration;

use axum::Router;
use lexis_api::{ApiClient, RetryPolicy};
use lexis_config::ApiConfig;

/// Serve `app` on 127.0.0.1 and return its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{addr}")
}

/// Retries with millisecond delays so tests stay fast.
pub const fn fast_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        base_delay: Duration::from_millis(5),
        max_delay: Duration::from_millis(20),
    }
}

pub fn client(base_url: &str, auth_token: Option<&str>, retry: RetryPolicy) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        user_agent: "lexis-tests".into(),
        auth_token: auth_token.map(str::to_string),
    };
    ApiClient::new(&config, retry).expect("client builds")
}
