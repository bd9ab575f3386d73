//! Markdown rendering of raw result sets.
//!
//! Rendering is a pure function of the input records: no re-sorting, no
//! deduplication, no network access. Missing or unparsable fields degrade
//! to placeholder values and never fail the render.

use crate::types::ResultRecord;

/// Highlights shown per record in search mode.
const SEARCH_HIGHLIGHT_LIMIT: usize = 3;
/// Highlights shown per record in contents mode.
const CONTENTS_HIGHLIGHT_LIMIT: usize = 5;
/// Character cap for a single rendered highlight.
const HIGHLIGHT_MAX_CHARS: usize = 300;
/// Character cap for the inline text preview (search mode).
const PREVIEW_MAX_CHARS: usize = 500;
/// Character cap for the fenced text block (contents mode).
const TEXT_BLOCK_MAX_CHARS: usize = 1000;

/// Extract the host portion of a URL for display.
///
/// Unparsable URLs (and URLs without a host) fall back to the raw string.
fn extract_domain(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}

/// Format a published date for display.
///
/// RFC 3339 timestamps render as `YYYY-MM-DD`; anything else degrades to
/// its first 10 characters; an absent date renders as `N/A`.
fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date else {
        return "N/A".to_owned();
    };
    if raw.contains('T') {
        if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
            return parsed.format("%Y-%m-%d").to_string();
        }
    }
    raw.chars().take(10).collect()
}

/// Trim a highlight, collapse newlines to spaces, and cap its length.
fn clean_highlight(highlight: &str) -> String {
    let cleaned = highlight.trim().replace('\n', " ");
    if cleaned.chars().count() > HIGHLIGHT_MAX_CHARS {
        let capped: String = cleaned.chars().take(HIGHLIGHT_MAX_CHARS).collect();
        format!("{capped}...")
    } else {
        cleaned
    }
}

/// Inline preview of full text for records with no summary and no
/// highlights (search mode). Truncates first, then cleans, so the
/// ellipsis reflects the original text length.
fn text_preview(text: &str) -> String {
    let capped: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
    let mut preview = capped.trim().replace('\n', " ");
    if text.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Literal text block for contents mode. Newlines are preserved.
fn text_block(text: &str) -> String {
    let capped: String = text.chars().take(TEXT_BLOCK_MAX_CHARS).collect();
    let mut block = capped.trim().to_owned();
    if text.chars().count() > TEXT_BLOCK_MAX_CHARS {
        block.push_str("...");
    }
    block
}

/// Non-empty view of an optional string field.
fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

/// Non-empty view of an optional highlight list.
fn present_highlights(field: Option<&Vec<String>>) -> Option<&[String]> {
    field.map(Vec::as_slice).filter(|h| !h.is_empty())
}

/// Render a search result set as a Markdown report.
///
/// Records render in input order, one section each: linked title (with a
/// placeholder for untitled records), source domain, formatted date, then
/// summary, highlights (at most three), or a text preview when neither is
/// available. An empty result set renders a fixed no-results message
/// referencing the query.
pub fn format_search_results(results: &[ResultRecord], query: &str) -> String {
    if results.is_empty() {
        return format!("## 搜索结果: \"{query}\"\n\n未找到相关结果。");
    }

    let mut lines = vec![format!("## 搜索结果: \"{query}\""), String::new()];

    for (index, item) in results.iter().enumerate() {
        let title = item.title.as_deref().unwrap_or("无标题");
        let domain = extract_domain(&item.url);
        let date = format_date(item.published_date.as_deref());
        let summary = present(item.summary.as_ref());
        let highlights = present_highlights(item.highlights.as_ref());
        let text = present(item.text.as_ref());

        lines.push(format!("### {}. [{title}]({})", index + 1, item.url));
        lines.push(format!("**来源**: {domain} | **日期**: {date}"));
        lines.push(String::new());

        if let Some(summary) = summary {
            lines.push(format!("**摘要**: {summary}"));
            lines.push(String::new());
        }

        if let Some(highlights) = highlights {
            lines.push("**关键内容**:".to_owned());
            for highlight in highlights.iter().take(SEARCH_HIGHLIGHT_LIMIT) {
                lines.push(format!("> {}", clean_highlight(highlight)));
            }
            lines.push(String::new());
        }

        if highlights.is_none() && summary.is_none() {
            if let Some(text) = text {
                lines.push(format!("**内容预览**: {}", text_preview(text)));
                lines.push(String::new());
            }
        }

        lines.push("---".to_owned());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render a content-fetch result set as a Markdown report.
///
/// Like [`format_search_results`] but without dates, with up to five
/// highlights per record, and with full text rendered as a fenced block
/// of up to 1000 characters instead of an inline preview.
pub fn format_contents_results(results: &[ResultRecord]) -> String {
    if results.is_empty() {
        return "## 内容抓取结果\n\n未获取到内容。".to_owned();
    }

    let mut lines = vec!["## 内容抓取结果".to_owned(), String::new()];

    for (index, item) in results.iter().enumerate() {
        let title = item.title.as_deref().unwrap_or("无标题");
        let domain = extract_domain(&item.url);
        let summary = present(item.summary.as_ref());
        let highlights = present_highlights(item.highlights.as_ref());
        let text = present(item.text.as_ref());

        lines.push(format!("### {}. [{title}]({})", index + 1, item.url));
        lines.push(format!("**来源**: {domain}"));
        lines.push(String::new());

        if let Some(summary) = summary {
            lines.push(format!("**摘要**: {summary}"));
            lines.push(String::new());
        }

        if let Some(highlights) = highlights {
            lines.push("**关键内容**:".to_owned());
            for highlight in highlights.iter().take(CONTENTS_HIGHLIGHT_LIMIT) {
                lines.push(format!("> {}", clean_highlight(highlight)));
            }
            lines.push(String::new());
        }

        if let Some(text) = text {
            lines.push(format!("**内容**:\n```\n{}\n```", text_block(text)));
            lines.push(String::new());
        }

        lines.push("---".to_owned());
        lines.push(String::new());
    }

    lines.join("\n")
}
