//! # exa-fetch
//!
//! Intent-aware CLI client for the Exa web search and content retrieval
//! API. A free-text query is classified into an intent category, the
//! intent selects a search configuration template, the configured request
//! runs against the hosted API, and the structured response is rendered
//! as a readable Markdown report.
//!
//! ## Design
//!
//! - Keyword-driven intent classification over an ordered trigger table
//! - Static per-intent configuration templates (search type, result
//!   count, category and domain filters, content extraction)
//! - One request per invocation: no retry, no caching, no ranking —
//!   searching itself is delegated entirely to the hosted service
//! - Rendering is pure and never fails; missing response fields degrade
//!   to placeholder values
//!
//! ## Security
//!
//! - The API key is read from the environment at startup and never
//!   appears in logs or error messages
//! - Queries are logged at debug level only

pub mod client;
pub mod config;
pub mod error;
pub mod intent;
pub mod render;
pub mod types;

pub use client::{ExaClient, SearchBackend};
pub use config::{ContentOptions, HighlightSpec, LiveCrawl, SearchConfig, SearchType, SummarySpec};
pub use error::{FetchError, Result};
pub use intent::{classify, Intent};
pub use render::{format_contents_results, format_search_results};
pub use types::{ResultRecord, SearchResponse};

/// Classify a query, resolve its intent configuration, run the search,
/// and render the report.
///
/// This is the `smart` flow: the full pipeline in one call. Pass
/// [`Intent::Auto`] as `intent` to classify the query by keywords, or a
/// specific intent to skip classification.
///
/// # Errors
///
/// Returns [`FetchError`] if the request fails; classification,
/// resolution, and rendering cannot fail.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> exa_fetch::Result<()> {
/// let client = exa_fetch::ExaClient::from_env()?;
/// let report = exa_fetch::smart_search(&client, "什么是 transformer 架构", exa_fetch::Intent::Auto, None).await?;
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
pub async fn smart_search(
    backend: &impl SearchBackend,
    query: &str,
    intent: Intent,
    num_results: Option<usize>,
) -> Result<String> {
    let intent = match intent {
        Intent::Auto => {
            let detected = classify(query);
            tracing::info!(intent = %detected, "detected query intent");
            detected
        }
        explicit => explicit,
    };

    let mut config = SearchConfig::for_intent(intent, query);
    if let Some(n) = num_results {
        config.num_results = n;
    }

    let results = backend.search(query, &config).await?;
    Ok(format_search_results(&results, query))
}
