use std::time::Duration;

use lexis_config::{ApiConfig, LexisConfig};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{check_response, decode_json};
use crate::retry::{RetryPolicy, with_retry};

/// HTTP client for the Lexis backend.
///
/// Every call goes through the retry policy the client was built with.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
    retry: RetryPolicy,
}

impl ApiClient {
    /// Build a client from the `api` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the section is invalid, or
    /// [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig, retry: RetryPolicy) -> Result<Self, ApiError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url_trimmed().to_string(),
            auth_token: config.auth_token.clone().filter(|t| !t.is_empty()),
            retry,
        })
    }

    /// Build a client from a full configuration, validating every section.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &LexisConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Self::new(&config.api, RetryPolicy::from(&config.retry))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
    ) -> Result<T, ApiError> {
        self.send::<T, ()>(operation, Method::GET, path, None).await
    }

    pub(crate) async fn post_json<T, B>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(operation, Method::POST, path, Some(body)).await
    }

    async fn send<T, B>(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let url = url.as_str();
        with_retry(&self.retry, operation, move || {
            self.execute(method.clone(), url, body)
        })
        .await
    }

    async fn execute<T, B>(&self, method: Method, url: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(%method, url, "sending request");
        let mut request = self.http.request(method, url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = check_response(request.send().await?).await?;
        decode_json(resp).await
    }
}
