//! Search configuration templates and per-intent resolution.
//!
//! [`SearchConfig`] describes one request against the search API. Most
//! callers obtain one from [`SearchConfig::for_intent`], which maps a
//! classified [`Intent`] to a statically defined template, parametrised
//! with the original query where the template calls for it.

use crate::error::FetchError;
use crate::intent::Intent;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search algorithm requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Let the service pick between keyword and embedding search.
    Auto,
    /// Embedding-based semantic search.
    Neural,
    /// Multi-pass deep search; slower, more thorough.
    Deep,
    /// Keyword search, lowest latency.
    Fast,
}

impl SearchType {
    /// Returns the wire name of this search type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Neural => "neural",
            Self::Deep => "deep",
            Self::Fast => "fast",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "neural" => Ok(Self::Neural),
            "deep" => Ok(Self::Deep),
            "fast" => Ok(Self::Fast),
            other => Err(format!("unknown search type: {other}")),
        }
    }
}

/// Live-crawl policy for content extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveCrawl {
    /// Never crawl live; cached content only.
    Never,
    /// Crawl live when no cached content exists.
    Fallback,
    /// Always crawl live.
    Always,
    /// Prefer live content, tolerate cache.
    Preferred,
}

impl LiveCrawl {
    /// Returns the wire name of this policy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Fallback => "fallback",
            Self::Always => "always",
            Self::Preferred => "preferred",
        }
    }
}

impl fmt::Display for LiveCrawl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LiveCrawl {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "never" => Ok(Self::Never),
            "fallback" => Ok(Self::Fallback),
            "always" => Ok(Self::Always),
            "preferred" => Ok(Self::Preferred),
            other => Err(format!("unknown livecrawl policy: {other}")),
        }
    }
}

/// Highlight extraction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSpec {
    /// Sentences per highlight.
    pub num_sentences: u32,
    /// Maximum highlights per result URL.
    pub highlights_per_url: u32,
    /// Focus query steering highlight selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Summary generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Focus query steering the generated summary.
    pub query: String,
}

/// Content-extraction options attached to a search or contents request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentOptions {
    /// Whether to return full page text.
    pub text: bool,
    /// Live-crawl policy.
    pub livecrawl: LiveCrawl,
    /// Highlight extraction, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<HighlightSpec>,
    /// Summary generation, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummarySpec>,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            text: true,
            livecrawl: LiveCrawl::Fallback,
            highlights: None,
            summary: None,
        }
    }
}

/// Configuration for one search request.
///
/// Always fully populated: required fields carry concrete defaults, and
/// only the fields typed as `Option` may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Which search algorithm to request.
    pub search_type: SearchType,
    /// Maximum number of results to request.
    pub num_results: usize,
    /// Category filter (e.g. "github", "news", "research paper").
    pub category: Option<String>,
    /// Restrict results to these domains.
    pub include_domains: Option<Vec<String>>,
    /// Exclude results from these domains.
    pub exclude_domains: Option<Vec<String>>,
    /// Only results published on or after this instant, RFC 3339.
    pub start_published_date: Option<String>,
    /// Content-extraction options; `None` skips content fetching.
    pub contents: Option<ContentOptions>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_type: SearchType::Deep,
            num_results: 10,
            category: None,
            include_domains: None,
            exclude_domains: None,
            start_published_date: None,
            contents: None,
        }
    }
}

/// Start of the news window: seven days before now, at day granularity,
/// formatted as `YYYY-MM-DDT00:00:00.000Z`.
pub fn news_window_start() -> String {
    let cutoff = chrono::Utc::now() - chrono::Duration::days(7);
    format!("{}T00:00:00.000Z", cutoff.format("%Y-%m-%d"))
}

impl SearchConfig {
    /// Resolve the configuration template for an intent.
    ///
    /// Templates are static; `query` only parametrises the highlight and
    /// summary focus fields of the `research` and `auto` templates. The
    /// result is always fully populated and `num_results` is always
    /// positive — resolution cannot fail.
    pub fn for_intent(intent: Intent, query: &str) -> Self {
        match intent {
            Intent::Concept => Self {
                search_type: SearchType::Neural,
                contents: Some(ContentOptions {
                    summary: Some(SummarySpec {
                        query: "Provide a clear and comprehensive explanation of this concept"
                            .to_owned(),
                    }),
                    highlights: Some(HighlightSpec {
                        num_sentences: 3,
                        highlights_per_url: 3,
                        query: Some("key definitions and explanations".to_owned()),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Intent::Tutorial => Self {
                search_type: SearchType::Auto,
                contents: Some(ContentOptions {
                    highlights: Some(HighlightSpec {
                        num_sentences: 3,
                        highlights_per_url: 5,
                        query: Some(
                            "step-by-step instructions and practical examples".to_owned(),
                        ),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Intent::Example => Self {
                search_type: SearchType::Auto,
                contents: Some(ContentOptions {
                    highlights: Some(HighlightSpec {
                        num_sentences: 2,
                        highlights_per_url: 5,
                        query: Some("code snippets and usage examples".to_owned()),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Intent::Github => Self {
                search_type: SearchType::Neural,
                category: Some("github".to_owned()),
                contents: Some(ContentOptions {
                    summary: Some(SummarySpec {
                        query: "What is this repository about and what are its main features?"
                            .to_owned(),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Intent::Paper => Self {
                search_type: SearchType::Neural,
                category: Some("research paper".to_owned()),
                include_domains: Some(vec![
                    "arxiv.org".to_owned(),
                    "paperswithcode.com".to_owned(),
                ]),
                contents: Some(ContentOptions {
                    summary: Some(SummarySpec {
                        query: "Summarize the research problem, methodology, and key findings"
                            .to_owned(),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Intent::News => Self {
                search_type: SearchType::Auto,
                category: Some("news".to_owned()),
                start_published_date: Some(news_window_start()),
                contents: Some(ContentOptions {
                    highlights: Some(HighlightSpec {
                        num_sentences: 2,
                        highlights_per_url: 3,
                        query: None,
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Intent::Research => Self {
                search_type: SearchType::Deep,
                num_results: 15,
                contents: Some(ContentOptions {
                    summary: Some(SummarySpec {
                        query: "Provide a comprehensive overview of this topic".to_owned(),
                    }),
                    highlights: Some(HighlightSpec {
                        num_sentences: 3,
                        highlights_per_url: 5,
                        query: Some(query.to_owned()),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Intent::Auto => Self {
                search_type: SearchType::Deep,
                contents: Some(ContentOptions {
                    highlights: Some(HighlightSpec {
                        num_sentences: 3,
                        highlights_per_url: 3,
                        query: Some(query.to_owned()),
                    }),
                    summary: Some(SummarySpec {
                        query: format!("Summarize the key points about: {query}"),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
        }
    }

    /// Configuration for the code-focused search flow.
    ///
    /// Deep search over code-heavy sites with long highlights. The default
    /// include-domain list is dropped when an explicit `category` is
    /// supplied, mirroring the category override semantics of the CLI.
    pub fn for_code(
        query: &str,
        num_results: usize,
        category: Option<String>,
        include_domains: Option<Vec<String>>,
    ) -> Self {
        let default_domains = || {
            vec![
                "github.com".to_owned(),
                "stackoverflow.com".to_owned(),
                "dev.to".to_owned(),
                "medium.com".to_owned(),
            ]
        };
        let include_domains = match (&category, include_domains) {
            (_, Some(domains)) => Some(domains),
            (Some(_), None) => None,
            (None, None) => Some(default_domains()),
        };

        Self {
            search_type: SearchType::Deep,
            num_results,
            category: Some(category.unwrap_or_else(|| "github".to_owned())),
            include_domains,
            contents: Some(ContentOptions {
                highlights: Some(HighlightSpec {
                    num_sentences: 5,
                    highlights_per_url: 5,
                    query: Some(format!("code examples and implementation for: {query}")),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Validates this configuration.
    ///
    /// Checks:
    /// - `num_results` must be greater than 0
    /// - domain filter lists, when present, must not be empty
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.num_results == 0 {
            return Err(FetchError::Config(
                "num_results must be greater than 0".into(),
            ));
        }
        if matches!(&self.include_domains, Some(domains) if domains.is_empty()) {
            return Err(FetchError::Config(
                "include_domains must not be an empty list".into(),
            ));
        }
        if matches!(&self.exclude_domains, Some(domains) if domains.is_empty()) {
            return Err(FetchError::Config(
                "exclude_domains must not be an empty list".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Intent;

    #[test]
    fn every_intent_resolves_with_positive_num_results() {
        for intent in Intent::all() {
            let config = SearchConfig::for_intent(*intent, "query");
            assert!(config.num_results > 0, "{intent} has zero num_results");
            assert!(config.validate().is_ok(), "{intent} fails validation");
        }
    }

    #[test]
    fn resolution_is_pure() {
        // News is clock-dependent at day granularity, so same-instant
        // resolutions still compare equal field for field.
        for intent in Intent::all() {
            let a = SearchConfig::for_intent(*intent, "rust async");
            let b = SearchConfig::for_intent(*intent, "rust async");
            assert_eq!(a, b, "{intent} resolution not reproducible");
        }
    }

    #[test]
    fn concept_template() {
        let config = SearchConfig::for_intent(Intent::Concept, "什么是 ownership");
        assert_eq!(config.search_type, SearchType::Neural);
        assert_eq!(config.num_results, 10);
        assert!(config.category.is_none());

        let contents = config.contents.expect("has contents");
        assert!(contents.text);
        assert_eq!(contents.livecrawl, LiveCrawl::Fallback);
        let highlights = contents.highlights.expect("has highlights");
        assert_eq!(highlights.num_sentences, 3);
        assert_eq!(highlights.highlights_per_url, 3);
        assert_eq!(
            highlights.query.as_deref(),
            Some("key definitions and explanations")
        );
        assert!(contents.summary.is_some());
    }

    #[test]
    fn tutorial_and_example_have_no_summary() {
        for intent in [Intent::Tutorial, Intent::Example] {
            let config = SearchConfig::for_intent(intent, "q");
            assert_eq!(config.search_type, SearchType::Auto);
            let contents = config.contents.expect("has contents");
            assert!(contents.summary.is_none());
            assert!(contents.highlights.is_some());
        }
    }

    #[test]
    fn example_highlights_are_two_sentences() {
        let config = SearchConfig::for_intent(Intent::Example, "q");
        let highlights = config
            .contents
            .expect("has contents")
            .highlights
            .expect("has highlights");
        assert_eq!(highlights.num_sentences, 2);
        assert_eq!(highlights.highlights_per_url, 5);
    }

    #[test]
    fn github_template_sets_category() {
        let config = SearchConfig::for_intent(Intent::Github, "q");
        assert_eq!(config.search_type, SearchType::Neural);
        assert_eq!(config.category.as_deref(), Some("github"));
        assert!(config.include_domains.is_none());
    }

    #[test]
    fn paper_template_restricts_domains() {
        let config = SearchConfig::for_intent(Intent::Paper, "q");
        assert_eq!(config.category.as_deref(), Some("research paper"));
        assert_eq!(
            config.include_domains.as_deref(),
            Some(&["arxiv.org".to_owned(), "paperswithcode.com".to_owned()][..])
        );
    }

    #[test]
    fn news_template_has_seven_day_window() {
        let config = SearchConfig::for_intent(Intent::News, "q");
        assert_eq!(config.category.as_deref(), Some("news"));

        let expected = format!(
            "{}T00:00:00.000Z",
            (chrono::Utc::now() - chrono::Duration::days(7)).format("%Y-%m-%d")
        );
        assert_eq!(config.start_published_date, Some(expected));

        let highlights = config
            .contents
            .expect("has contents")
            .highlights
            .expect("has highlights");
        assert_eq!(highlights.num_sentences, 2);
        assert_eq!(highlights.highlights_per_url, 3);
        assert!(highlights.query.is_none());
    }

    #[test]
    fn news_window_is_clock_relative() {
        // Not a frozen constant: the window tracks the current date.
        let start = news_window_start();
        assert!(start.ends_with("T00:00:00.000Z"));
        let today = format!("{}", chrono::Utc::now().format("%Y-%m-%d"));
        assert_ne!(&start[..10], today.as_str());
    }

    #[test]
    fn research_template_focuses_highlights_on_query() {
        let config = SearchConfig::for_intent(Intent::Research, "distributed consensus");
        assert_eq!(config.search_type, SearchType::Deep);
        assert_eq!(config.num_results, 15);
        let contents = config.contents.expect("has contents");
        assert_eq!(
            contents.highlights.expect("has highlights").query.as_deref(),
            Some("distributed consensus")
        );
        assert!(contents.summary.is_some());
    }

    #[test]
    fn auto_template_embeds_query_in_summary_focus() {
        let config = SearchConfig::for_intent(Intent::Auto, "zero-copy parsing");
        assert_eq!(config.search_type, SearchType::Deep);
        assert_eq!(config.num_results, 10);
        let contents = config.contents.expect("has contents");
        assert_eq!(
            contents.summary.expect("has summary").query,
            "Summarize the key points about: zero-copy parsing"
        );
        assert_eq!(
            contents.highlights.expect("has highlights").query.as_deref(),
            Some("zero-copy parsing")
        );
    }

    #[test]
    fn code_config_defaults() {
        let config = SearchConfig::for_code("binary heap", 10, None, None);
        assert_eq!(config.search_type, SearchType::Deep);
        assert_eq!(config.category.as_deref(), Some("github"));
        let domains = config.include_domains.expect("has domains");
        assert_eq!(domains.len(), 4);
        assert!(domains.contains(&"github.com".to_owned()));

        let highlights = config
            .contents
            .expect("has contents")
            .highlights
            .expect("has highlights");
        assert_eq!(highlights.num_sentences, 5);
        assert_eq!(
            highlights.query.as_deref(),
            Some("code examples and implementation for: binary heap")
        );
    }

    #[test]
    fn code_config_category_override_drops_default_domains() {
        let config = SearchConfig::for_code("q", 5, Some("pdf".to_owned()), None);
        assert_eq!(config.category.as_deref(), Some("pdf"));
        assert!(config.include_domains.is_none());
    }

    #[test]
    fn code_config_explicit_domains_kept() {
        let config = SearchConfig::for_code(
            "q",
            5,
            Some("pdf".to_owned()),
            Some(vec!["docs.rs".to_owned()]),
        );
        assert_eq!(config.include_domains.as_deref(), Some(&["docs.rs".to_owned()][..]));
    }

    #[test]
    fn zero_num_results_rejected() {
        let config = SearchConfig {
            num_results: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("num_results"));
    }

    #[test]
    fn empty_domain_list_rejected() {
        let config = SearchConfig {
            include_domains: Some(vec![]),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("include_domains"));
    }

    #[test]
    fn search_type_parse_and_display() {
        for ty in [
            SearchType::Auto,
            SearchType::Neural,
            SearchType::Deep,
            SearchType::Fast,
        ] {
            let parsed: SearchType = ty.name().parse().expect("parses");
            assert_eq!(parsed, ty);
        }
        assert!("warp".parse::<SearchType>().is_err());
    }

    #[test]
    fn livecrawl_parse_and_display() {
        for policy in [
            LiveCrawl::Never,
            LiveCrawl::Fallback,
            LiveCrawl::Always,
            LiveCrawl::Preferred,
        ] {
            let parsed: LiveCrawl = policy.name().parse().expect("parses");
            assert_eq!(parsed, policy);
        }
        assert!("sometimes".parse::<LiveCrawl>().is_err());
    }

    #[test]
    fn highlight_spec_serializes_camel_case() {
        let spec = HighlightSpec {
            num_sentences: 3,
            highlights_per_url: 5,
            query: Some("focus".to_owned()),
        };
        let json = serde_json::to_value(&spec).expect("serialize");
        assert_eq!(json["numSentences"], 3);
        assert_eq!(json["highlightsPerUrl"], 5);
        assert_eq!(json["query"], "focus");
    }

    #[test]
    fn highlight_spec_omits_absent_focus() {
        let spec = HighlightSpec {
            num_sentences: 2,
            highlights_per_url: 3,
            query: None,
        };
        let json = serde_json::to_value(&spec).expect("serialize");
        assert!(json.get("query").is_none());
    }

    #[test]
    fn content_options_serialize_wire_shape() {
        let options = ContentOptions {
            summary: Some(SummarySpec {
                query: "Summarize the main points".to_owned(),
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&options).expect("serialize");
        assert_eq!(json["text"], true);
        assert_eq!(json["livecrawl"], "fallback");
        assert_eq!(json["summary"]["query"], "Summarize the main points");
        assert!(json.get("highlights").is_none());
    }
}
