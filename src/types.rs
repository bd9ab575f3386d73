//! Wire types for API responses.

use serde::{Deserialize, Serialize};

/// One retrieved item from a search or contents response.
///
/// Every field except `url` is optional on the wire; absent values stay
/// [`None`] rather than degrading to sentinel strings, so the renderer's
/// fallback rules can branch on presence explicitly. Records have no
/// identity beyond their URL and duplicates are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    /// Page title.
    #[serde(default)]
    pub title: Option<String>,
    /// Result URL.
    #[serde(default)]
    pub url: String,
    /// Publication timestamp, RFC 3339 when the service knows it.
    #[serde(default)]
    pub published_date: Option<String>,
    /// Generated summary, when requested and available.
    #[serde(default)]
    pub summary: Option<String>,
    /// Extracted highlight snippets, when requested and available.
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
    /// Full page text, when requested and available.
    #[serde(default)]
    pub text: Option<String>,
}

/// Top-level response envelope from the search and contents endpoints.
///
/// Only the `results` array is consumed; everything else in the response
/// is ignored (presence checks, not schema validation).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Retrieved records, in service order.
    #[serde(default)]
    pub results: Vec<ResultRecord>,
}
