//! HTTP client with retry
//!
//! Provides an HTTP client that handles:
//! - Automatic retries with configurable backoff
//! - JSON and form-encoded request bodies
//! - Response metadata extraction
//! - Error classification for retry decisions

use super::response::Response;
use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use crate::types::BackoffType;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            backoff_type: BackoffType::Exponential,
            default_headers: HashMap::new(),
            user_agent: format!("geddit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: HashMap<String, String>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Request body (form-encoded), ignored when a JSON body is set
    pub form: Option<Vec<(String, String)>>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
    /// Override max retries for this request
    pub max_retries: Option<u32>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a form field
    #[must_use]
    pub fn form_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set max retries
    #[must_use]
    pub fn retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }
}

/// HTTP client with retry and optional authentication
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Option<Authenticator>,
}

/// What one attempt of a request came to
enum Attempt {
    Done(reqwest::Response),
    /// Worth another try; `wait` overrides the configured backoff
    Retry {
        error: Error,
        wait: Option<Duration>,
    },
    Fatal(Error),
}

impl HttpClient {
    /// Create a client with custom configuration and no authentication
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            config,
            authenticator: None,
        })
    }

    /// Create a client that authenticates every request.
    ///
    /// Token requests reuse the same connection pool.
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let mut client = Self::with_config(config)?;
        client.authenticator = Some(Authenticator::with_client(
            auth_config,
            client.client.clone(),
        ));
        Ok(client)
    }

    /// Send a request, retrying transient failures, and return the raw body
    /// with the response metadata.
    ///
    /// Any 4xx or 5xx status left after retries is an [`Error::HttpStatus`].
    pub async fn request_bytes(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<(Vec<u8>, Response)> {
        let full_url = self.build_url(url);
        let response = self.send_with_retry(&method, &full_url, &config).await?;

        let meta = Response::from_parts(response.status().as_u16(), response.headers());
        let body = response.bytes().await.map_err(Error::Http)?;
        debug!(
            "{} {} -> {} ({} bytes)",
            method,
            full_url,
            meta.status,
            body.len()
        );
        Ok((body.to_vec(), meta))
    }

    async fn send_with_retry(
        &self,
        method: &Method,
        full_url: &str,
        config: &RequestConfig,
    ) -> Result<reqwest::Response> {
        let max_retries = config.max_retries.unwrap_or(self.config.max_retries);
        let timeout = config.timeout.unwrap_or(self.config.timeout);
        let mut attempt = 0;

        loop {
            let req = self.build_request(method, full_url, config, timeout).await?;

            let outcome = match req.send().await {
                Ok(response) => classify_response(response).await,
                Err(e) => classify_send_error(e, timeout),
            };

            match outcome {
                Attempt::Done(response) => return Ok(response),
                Attempt::Fatal(error) => return Err(error),
                Attempt::Retry { error, .. } if attempt >= max_retries => return Err(error),
                Attempt::Retry { error, wait } => {
                    let delay = wait.unwrap_or_else(|| self.calculate_backoff(attempt));
                    warn!(
                        "{}, attempt {}/{}, retrying in {:?}",
                        error,
                        attempt + 1,
                        max_retries + 1,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Assemble one attempt; rebuilt each time so auth can refresh
    async fn build_request(
        &self,
        method: &Method,
        full_url: &str,
        config: &RequestConfig,
        timeout: Duration,
    ) -> Result<RequestBuilder> {
        let mut req = self
            .client
            .request(method.clone(), full_url)
            .timeout(timeout);

        for (key, value) in self.config.default_headers.iter().chain(&config.headers) {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(body) = &config.body {
            req = req.json(body);
        } else if let Some(form) = &config.form {
            req = req.form(form);
        }

        match &self.authenticator {
            Some(auth) => auth.apply(req).await,
            None => Ok(req),
        }
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff_type {
            BackoffType::Constant => self.config.initial_backoff,
            BackoffType::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff * factor
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_authenticator", &self.authenticator.is_some())
            .finish_non_exhaustive()
    }
}

async fn classify_response(response: reqwest::Response) -> Attempt {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = extract_retry_after(&response);
        return Attempt::Retry {
            error: Error::RateLimited {
                retry_after_seconds: retry_after,
            },
            wait: Some(Duration::from_secs(retry_after)),
        };
    }

    if !status.is_client_error() && !status.is_server_error() {
        return Attempt::Done(response);
    }

    let body = response.text().await.unwrap_or_default();
    let error = Error::http_status(status.as_u16(), body);
    if is_retryable_status(status) {
        Attempt::Retry { error, wait: None }
    } else {
        Attempt::Fatal(error)
    }
}

fn classify_send_error(e: reqwest::Error, timeout: Duration) -> Attempt {
    if e.is_timeout() {
        Attempt::Retry {
            error: Error::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            },
            wait: None,
        }
    } else if e.is_connect() {
        Attempt::Retry {
            error: Error::Http(e),
            wait: None,
        }
    } else {
        Attempt::Fatal(Error::Http(e))
    }
}

/// Server errors worth another attempt, including Cloudflare's 52x range
fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status.as_u16(),
        500 | 502 | 503 | 504 | 520 | 521 | 522 | 523 | 524
    )
}

/// Seconds from the `retry-after` header, 60 when absent or unparseable
fn extract_retry_after(response: &reqwest::Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(60)
}
