//! CLI binary for exa-fetch.

use clap::{Parser, Subcommand};
use exa_fetch::{
    format_contents_results, format_search_results, ContentOptions, ExaClient, HighlightSpec,
    Intent, LiveCrawl, SearchBackend, SearchConfig, SearchType, SummarySpec,
};
use tracing_subscriber::EnvFilter;

/// Exa Fetch: intent-aware web search and content fetching.
#[derive(Parser)]
#[command(name = "exa-fetch", version, about)]
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Search the web with optional content fetching.
    Search {
        /// Search query.
        query: String,

        /// Number of results.
        #[arg(short = 'n', long, default_value_t = 10)]
        num_results: usize,

        /// Search type: auto, neural, deep, or fast.
        #[arg(short = 't', long = "type", default_value = "deep")]
        search_type: SearchType,

        /// Filter by category (e.g. github, "research paper", news).
        #[arg(short, long)]
        category: Option<String>,

        /// Comma-separated list of domains to include.
        #[arg(long)]
        include_domains: Option<String>,

        /// Comma-separated list of domains to exclude.
        #[arg(long)]
        exclude_domains: Option<String>,

        /// Only results published after this date (ISO format: 2024-01-01).
        #[arg(long)]
        start_date: Option<String>,

        /// Skip content fetching (faster, less detail).
        #[arg(long)]
        no_contents: bool,

        /// Disable highlights extraction.
        #[arg(long)]
        no_highlights: bool,

        /// Disable summary generation.
        #[arg(long)]
        no_summary: bool,
    },

    /// Fetch content from specific URLs.
    Contents {
        /// URLs to fetch.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Live crawl mode: never, fallback, always, or preferred.
        #[arg(long, default_value = "fallback")]
        livecrawl: LiveCrawl,

        /// Disable highlights extraction.
        #[arg(long)]
        no_highlights: bool,

        /// Disable summary generation.
        #[arg(long)]
        no_summary: bool,
    },

    /// Search for code examples and implementations.
    Code {
        /// Code search query.
        query: String,

        /// Number of results.
        #[arg(short = 'n', long, default_value_t = 10)]
        num_results: usize,

        /// Override the default github category.
        #[arg(short, long)]
        category: Option<String>,

        /// Override the default code-focused domains.
        #[arg(long)]
        include_domains: Option<String>,
    },

    /// Smart search with automatic intent detection.
    Smart {
        /// Search query (intent auto-detected).
        query: String,

        /// Override the auto-detected intent.
        #[arg(short, long, default_value = "auto")]
        intent: Intent,

        /// Number of results (default: intent-based).
        #[arg(short = 'n', long)]
        num_results: Option<usize>,
    },
}

/// Split a comma-separated domain list, dropping empty entries.
fn split_domains(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(|domain| domain.trim().to_owned())
        .filter(|domain| !domain.is_empty())
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("exa_fetch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Credential check happens here, before any request is built.
    let client = ExaClient::from_env()?;

    let report = match cli.command {
        Command::Search {
            query,
            num_results,
            search_type,
            category,
            include_domains,
            exclude_domains,
            start_date,
            no_contents,
            no_highlights,
            no_summary,
        } => {
            let contents = (!no_contents).then(|| ContentOptions {
                highlights: (!no_highlights).then(|| HighlightSpec {
                    num_sentences: 3,
                    highlights_per_url: 3,
                    query: Some(query.clone()),
                }),
                summary: (!no_summary).then(|| SummarySpec {
                    query: format!("Summarize the key points about: {query}"),
                }),
                ..Default::default()
            });
            let config = SearchConfig {
                search_type,
                num_results,
                category,
                include_domains: include_domains.as_deref().map(split_domains),
                exclude_domains: exclude_domains.as_deref().map(split_domains),
                start_published_date: start_date,
                contents,
            };

            let results = client.search(&query, &config).await?;
            format_search_results(&results, &query)
        }

        Command::Contents {
            urls,
            livecrawl,
            no_highlights,
            no_summary,
        } => {
            let options = ContentOptions {
                livecrawl,
                highlights: (!no_highlights).then(|| HighlightSpec {
                    num_sentences: 3,
                    highlights_per_url: 5,
                    query: None,
                }),
                summary: (!no_summary).then(|| SummarySpec {
                    query: "Summarize the main points".to_owned(),
                }),
                ..Default::default()
            };

            let results = client.fetch_contents(&urls, &options).await?;
            format_contents_results(&results)
        }

        Command::Code {
            query,
            num_results,
            category,
            include_domains,
        } => {
            let config = SearchConfig::for_code(
                &query,
                num_results,
                category,
                include_domains.as_deref().map(split_domains),
            );

            let results = client.search(&query, &config).await?;
            format_search_results(&results, &query)
        }

        Command::Smart {
            query,
            intent,
            num_results,
        } => exa_fetch::smart_search(&client, &query, intent, num_results).await?,
    };

    println!("{report}");
    Ok(())
}
