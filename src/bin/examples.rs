//! Runnable example flows for exa-fetch.
//!
//! Each example exercises the full pipeline (classify → resolve → search
//! → render) with a representative query. Failures are isolated: one
//! failing example logs an error and the run continues.

use exa_fetch::{
    classify, format_contents_results, format_search_results, ContentOptions, ExaClient,
    HighlightSpec, SearchBackend, SearchConfig, SummarySpec,
};
use tracing_subscriber::EnvFilter;

const EXAMPLES: &[&str] = &[
    "concept", "tutorial", "github", "paper", "news", "code", "contents",
];

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Run an intent-driven search example end to end.
async fn run_intent_example(
    client: &ExaClient,
    title: &str,
    query: &str,
) -> exa_fetch::Result<()> {
    banner(title);

    let intent = classify(query);
    let config = SearchConfig::for_intent(intent, query);
    println!("检测到意图: {intent}");
    println!("搜索类型: {}", config.search_type);
    println!("结果数量: {}", config.num_results);
    println!();

    let results = client.search(query, &config).await?;
    println!("{}", format_search_results(&results, query));
    Ok(())
}

async fn run_code_example(client: &ExaClient) -> exa_fetch::Result<()> {
    banner("示例: 代码搜索 - tokio channel 用法");

    let query = "tokio mpsc channel usage";
    let config = SearchConfig::for_code(query, 5, None, None);
    let results = client.search(query, &config).await?;
    println!("{}", format_search_results(&results, query));
    Ok(())
}

async fn run_contents_example(client: &ExaClient) -> exa_fetch::Result<()> {
    banner("示例: URL 抓取");

    let urls = vec!["https://doc.rust-lang.org/book/ch04-01-what-is-ownership.html".to_owned()];
    let options = ContentOptions {
        highlights: Some(HighlightSpec {
            num_sentences: 3,
            highlights_per_url: 5,
            query: None,
        }),
        summary: Some(SummarySpec {
            query: "Summarize the main points".to_owned(),
        }),
        ..Default::default()
    };
    let results = client.fetch_contents(&urls, &options).await?;
    println!("{}", format_contents_results(&results));
    Ok(())
}

async fn run_example(client: &ExaClient, name: &str) -> exa_fetch::Result<()> {
    match name {
        "concept" => {
            run_intent_example(client, "示例: 概念查询 - 什么是 transformer 架构", "什么是 transformer 架构").await
        }
        "tutorial" => {
            run_intent_example(client, "示例: 教程搜索 - Python 异步编程", "Python asyncio 教程入门").await
        }
        "github" => {
            run_intent_example(client, "示例: GitHub 搜索 - Rust web framework", "rust web framework repository").await
        }
        "paper" => {
            run_intent_example(client, "示例: 论文搜索 - attention 机制", "attention mechanism 论文").await
        }
        "news" => run_intent_example(client, "示例: 新闻搜索 - Rust 最新动态", "Rust 最新发布").await,
        "code" => run_code_example(client).await,
        "contents" => run_contents_example(client).await,
        other => Err(exa_fetch::FetchError::Config(format!(
            "unknown example: {other}; known examples: {}",
            EXAMPLES.join(", ")
        ))),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("exa_fetch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let selection: Vec<String> = std::env::args().skip(1).collect();
    if selection.is_empty() {
        println!("用法: exa-fetch-examples <example...>|all");
        println!("可用示例: {}", EXAMPLES.join(", "));
        return Ok(());
    }

    let names: Vec<&str> = if selection.iter().any(|s| s == "all") {
        EXAMPLES.to_vec()
    } else {
        selection.iter().map(String::as_str).collect()
    };

    let client = ExaClient::from_env()?;

    // Failures are isolated per example; later examples still run.
    let mut failed = 0usize;
    for name in &names {
        if let Err(err) = run_example(&client, name).await {
            failed += 1;
            tracing::error!(example = name, error = %err, "example failed");
        }
        println!();
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} examples failed", names.len());
    }
    Ok(())
}
