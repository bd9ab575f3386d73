//! Query intent classification via keyword matching.
//!
//! A raw query is mapped to one of a fixed set of intent categories by
//! scanning an ordered trigger table. Matching is plain substring
//! containment on the lower-cased query — deliberately not word-boundary
//! aware, so a trigger like "guide" also matches inside a longer word.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recognised query intents.
///
/// [`Intent::Auto`] doubles as an explicit selection and as the fallback
/// when no trigger matches; it never appears in the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// "What is X" style concept explanations.
    Concept,
    /// How-to guides and step-by-step instructions.
    Tutorial,
    /// Code samples and usage demonstrations.
    Example,
    /// Repositories, libraries, and frameworks.
    Github,
    /// Academic papers and research publications.
    Paper,
    /// Recent announcements and current events.
    News,
    /// Deep, comprehensive topic research.
    Research,
    /// No specific intent; the general-purpose default.
    Auto,
}

/// Trigger substrings per intent, mixed Chinese and English.
///
/// Iteration order is part of the classification contract: the first
/// intent with a matching trigger wins, so the table must stay in the
/// canonical order concept, tutorial, example, github, paper, news,
/// research.
const KEYWORD_TABLE: &[(Intent, &[&str])] = &[
    (
        Intent::Concept,
        &[
            "什么是", "what is", "explain", "解释", "define", "定义", "介绍", "了解", "理解",
            "meaning of", "概念",
        ],
    ),
    (
        Intent::Tutorial,
        &[
            "教程", "tutorial", "guide", "how to", "如何", "怎么", "学习", "入门", "指南",
            "步骤", "learn",
        ],
    ),
    (
        Intent::Example,
        &[
            "示例", "example", "sample", "demo", "案例", "代码", "实现", "implementation",
            "snippet", "用法",
        ],
    ),
    (
        Intent::Github,
        &[
            "github", "repository", "repo", "仓库", "项目", "开源", "library", "框架",
            "framework", "package", "库",
        ],
    ),
    (
        Intent::Paper,
        &[
            "论文", "paper", "research", "arxiv", "研究", "学术", "publication", "study",
            "科研",
        ],
    ),
    (
        Intent::News,
        &[
            "新闻", "news", "latest", "最新", "recent", "动态", "发布", "announcement",
            "更新", "trends",
        ],
    ),
    (
        Intent::Research,
        &[
            "调研", "research", "deep dive", "comprehensive", "全面", "深入", "分析",
            "analysis", "详细", "thorough",
        ],
    ),
];

impl Intent {
    /// Returns the lower-case name of this intent.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::Tutorial => "tutorial",
            Self::Example => "example",
            Self::Github => "github",
            Self::Paper => "paper",
            Self::News => "news",
            Self::Research => "research",
            Self::Auto => "auto",
        }
    }

    /// Returns all intent variants, table order first, `Auto` last.
    pub fn all() -> &'static [Intent] {
        &[
            Self::Concept,
            Self::Tutorial,
            Self::Example,
            Self::Github,
            Self::Paper,
            Self::News,
            Self::Research,
            Self::Auto,
        ]
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "concept" => Ok(Self::Concept),
            "tutorial" => Ok(Self::Tutorial),
            "example" => Ok(Self::Example),
            "github" => Ok(Self::Github),
            "paper" => Ok(Self::Paper),
            "news" => Ok(Self::News),
            "research" => Ok(Self::Research),
            "auto" => Ok(Self::Auto),
            other => Err(format!("unknown intent: {other}")),
        }
    }
}

/// Classify a query by its trigger keywords.
///
/// The query is lower-cased and each intent's triggers are tested for
/// substring containment, in table order. The first intent with at least
/// one match is returned; a query matching nothing (including the empty
/// query) classifies as [`Intent::Auto`].
///
/// Infallible and side-effect free.
///
/// # Examples
///
/// ```
/// use exa_fetch::{classify, Intent};
///
/// assert_eq!(classify("what is rust ownership"), Intent::Concept);
/// assert_eq!(classify("tokio tracing setup"), Intent::Auto);
/// ```
pub fn classify(query: &str) -> Intent {
    let query_lower = query.to_lowercase();

    for (intent, triggers) in KEYWORD_TABLE {
        if triggers.iter().any(|kw| query_lower.contains(kw)) {
            return *intent;
        }
    }

    Intent::Auto
}
