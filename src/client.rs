//! API client for the hosted search service.
//!
//! [`SearchBackend`] is the narrow interface the rest of the crate depends
//! on — two operations, single attempt, no retry — so the decision engine
//! and renderer can be exercised against canned backends in tests.
//! [`ExaClient`] is the real implementation over [`reqwest`].

use crate::config::{ContentOptions, SearchConfig};
use crate::error::{FetchError, Result};
use crate::types::{ResultRecord, SearchResponse};
use std::future::Future;
use std::time::Duration;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.exa.ai";

/// Per-request timeout in seconds. One attempt; a timeout fails the
/// whole invocation.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "EXA_API_KEY";

/// Environment variable optionally overriding the endpoint (mock servers).
pub const BASE_URL_ENV: &str = "EXA_BASE_URL";

/// Placeholder key value shipped in documentation; treated as unconfigured.
const PLACEHOLDER_API_KEY: &str = "YOUR_EXA_API_KEY_HERE";

/// A search/content-retrieval backend.
///
/// Both operations are synchronous from the caller's point of view: one
/// request, one response, failures surfaced as a single [`FetchError`].
/// Implementations must be `Send + Sync`.
pub trait SearchBackend: Send + Sync {
    /// Execute a configured search and return the raw result records.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] on network failure or timeout,
    /// [`FetchError::Api`] on a non-2xx response, and
    /// [`FetchError::Parse`] if the response body cannot be decoded.
    fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl Future<Output = Result<Vec<ResultRecord>>> + Send;

    /// Fetch extracted content for specific URLs.
    ///
    /// # Errors
    ///
    /// Same as [`SearchBackend::search`].
    fn fetch_contents(
        &self,
        urls: &[String],
        options: &ContentOptions,
    ) -> impl Future<Output = Result<Vec<ResultRecord>>> + Send;
}

/// Build the `/search` request body.
///
/// Optional configuration fields are omitted from the payload entirely
/// rather than sent as null.
pub fn build_search_payload(query: &str, config: &SearchConfig) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "query": query,
        "type": config.search_type.name(),
        "numResults": config.num_results,
    });

    if let Some(ref category) = config.category {
        payload["category"] = serde_json::Value::String(category.clone());
    }
    if let Some(ref domains) = config.include_domains {
        payload["includeDomains"] = serde_json::json!(domains);
    }
    if let Some(ref domains) = config.exclude_domains {
        payload["excludeDomains"] = serde_json::json!(domains);
    }
    if let Some(ref date) = config.start_published_date {
        payload["startPublishedDate"] = serde_json::Value::String(date.clone());
    }
    if let Some(ref contents) = config.contents {
        payload["contents"] = serde_json::json!(contents);
    }

    payload
}

/// Build the `/contents` request body.
///
/// Unlike `/search`, extraction options sit at the top level of the
/// payload next to the URL list.
pub fn build_contents_payload(urls: &[String], options: &ContentOptions) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "urls": urls,
        "livecrawl": options.livecrawl.name(),
    });

    if options.text {
        payload["text"] = serde_json::Value::Bool(true);
    }
    if let Some(ref highlights) = options.highlights {
        payload["highlights"] = serde_json::json!(highlights);
    }
    if let Some(ref summary) = options.summary {
        payload["summary"] = serde_json::json!(summary);
    }

    payload
}

/// Validate a resolved API key value.
///
/// Rejects empty values and the documentation placeholder.
fn validate_api_key(key: &str) -> Result<String> {
    let key = key.trim();
    if key.is_empty() {
        return Err(FetchError::Config(format!("{API_KEY_ENV} is empty")));
    }
    if key == PLACEHOLDER_API_KEY {
        return Err(FetchError::Config(format!(
            "{API_KEY_ENV} still holds the placeholder value; set a real API key"
        )));
    }
    Ok(key.to_owned())
}

/// Client for the hosted search API.
#[derive(Debug, Clone)]
pub struct ExaClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl ExaClient {
    /// Create a client with an explicit API key and the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Config`] for an empty or placeholder key and
    /// [`FetchError::Transport`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = validate_api_key(&api_key.into())?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            client,
        })
    }

    /// Create a client from the environment (`EXA_API_KEY`, optionally
    /// `EXA_BASE_URL`).
    ///
    /// Runs before any network access; a missing or placeholder key is a
    /// fatal [`FetchError::Config`].
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| FetchError::Config(format!("{API_KEY_ENV} is not set")))?;
        let mut client = Self::new(key)?;
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            client.base_url = base_url.trim_end_matches('/').to_owned();
        }
        Ok(client)
    }

    /// Override the endpoint base URL (useful for testing with mock servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    async fn post_json(&self, path: &str, payload: &serde_json::Value) -> Result<SearchResponse> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "sending API request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Transport(format!(
                        "request timed out after {REQUEST_TIMEOUT_SECS}s"
                    ))
                } else {
                    FetchError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "API request rejected");
            return Err(FetchError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

impl SearchBackend for ExaClient {
    async fn search(&self, query: &str, config: &SearchConfig) -> Result<Vec<ResultRecord>> {
        config.validate()?;
        let payload = build_search_payload(query, config);
        let response = self.post_json("/search", &payload).await?;
        tracing::debug!(count = response.results.len(), "search returned results");
        Ok(response.results)
    }

    async fn fetch_contents(
        &self,
        urls: &[String],
        options: &ContentOptions,
    ) -> Result<Vec<ResultRecord>> {
        if urls.is_empty() {
            return Err(FetchError::Config("no URLs to fetch".into()));
        }
        let payload = build_contents_payload(urls, options);
        let response = self.post_json("/contents", &payload).await?;
        tracing::debug!(count = response.results.len(), "contents returned records");
        Ok(response.results)
    }
}
