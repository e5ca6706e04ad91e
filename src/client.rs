use std::env;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};
use crate::observability;
use crate::types::{ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Transport to the AutoQA backend.
///
/// The session talks to the backend through this trait so its state
/// machine can be exercised in tests with a fake transport instead of a
/// live server.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Submit a query and return the agent's full reply text.
    async fn run_test(&self, query: &str) -> Result<String>;

    /// The origin screenshots are served from.
    fn origin(&self) -> &str;
}

/// HTTP client for the AutoQA backend.
#[derive(Debug, Clone)]
pub struct AutoQa {
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
}

impl AutoQa {
    /// Create a new AutoQA client.
    ///
    /// The backend URL can be provided directly, read from the
    /// AUTOQA_URL environment variable, or left to default to
    /// http://localhost:8000.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        Self::with_options(base_url, None)
    }

    /// Create a new client with a custom timeout.
    pub fn with_options(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url
            .or_else(|| env::var("AUTOQA_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// The backend origin this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create and return default headers for backend requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Process backend response errors and convert to our Error type.
    async fn process_error_response(response: Response) -> Error {
        let status_code = response.status().as_u16();

        // FastAPI wraps failures as {"detail": "..."}.
        #[derive(Deserialize)]
        struct ErrorResponse {
            detail: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        let message = serde_json::from_str::<ErrorResponse>(&error_body)
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or(error_body);

        Error::api(status_code, message)
    }
}

#[async_trait::async_trait]
impl Backend for AutoQa {
    /// Submit a query to the backend and wait for the single full reply.
    async fn run_test(&self, query: &str) -> Result<String> {
        let url = format!("{}/chat", self.base_url);
        observability::CLIENT_REQUESTS.click();

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers())
            .json(&ChatRequest::new(query))
            .send()
            .await
            .map_err(|e| {
                observability::CLIENT_REQUEST_ERRORS.click();
                if e.is_timeout() {
                    Error::timeout(
                        format!("Request timed out: {}", e),
                        Some(self.timeout.as_secs_f64()),
                    )
                } else if e.is_connect() {
                    Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
                }
            })?;

        if !response.status().is_success() {
            observability::CLIENT_REQUEST_ERRORS.click();
            return Err(Self::process_error_response(response).await);
        }

        let body = response.json::<ChatResponse>().await.map_err(|e| {
            observability::CLIENT_REQUEST_ERRORS.click();
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        })?;
        Ok(body.response)
    }

    fn origin(&self) -> &str {
        &self.base_url
    }
}
