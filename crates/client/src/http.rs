//! JSON-over-HTTP client core for the kiglist API.
//!
//! [`HttpClient`] resolves relative endpoints against a base URL, always
//! sends `Content-Type: application/json`, and turns non-2xx responses into
//! [`ApiError::Status`] carrying the server's error text. It never retries.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default base URL of the kiglist API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

/// Errors from the HTTP client core.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    ///
    /// `message` is the response body, or `HTTP error! status: <code>`
    /// when the body was empty.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided error text.
        message: String,
    },

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// A header value (usually the bearer token) is not valid ASCII.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Method, body, and extra headers of a single request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Vec<u8>>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    /// A bodiless `GET`.
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// A request with `body` serialized as JSON.
    pub fn json<B: Serialize + ?Sized>(method: Method, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            method,
            body: Some(serde_json::to_vec(body)?),
            headers: HeaderMap::new(),
        })
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for the API at `base_url`, e.g. `http://host:8001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (connection pooling, timeouts configured by the caller).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request to `endpoint` (relative, starting with `/`) and decode
    /// the JSON response.
    ///
    /// Caller-supplied headers override the default `Content-Type`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(method = %options.method, endpoint, "Sending API request");

        let mut request = self
            .client
            .request(options.method.clone(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .headers(options.headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let response = Self::ensure_success(&options.method, endpoint, response).await?;
        Ok(response.json::<T>().await?)
    }

    /// [`fetch`](Self::fetch) with an `Authorization: Bearer <token>` header.
    pub async fn fetch_with_auth<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token: &str,
        mut options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))?;
        options.headers.insert(AUTHORIZATION, value);
        self.fetch(endpoint, options).await
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or an
    /// [`ApiError::Status`] built from the body text on failure.
    async fn ensure_success(
        method: &Method,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            format!("HTTP error! status: {}", status.as_u16())
        } else {
            body
        };

        tracing::warn!(%method, endpoint, status = status.as_u16(), "API request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
