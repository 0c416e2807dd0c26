//! 首页信息流：分类筛选、搜索、热门与可信度分档

use std::fmt;
use std::str::FromStr;

use nationpost_shared::Article;

/// 首页可选的新闻分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedCategory {
    #[default]
    All,
    Geopolitics,
    Business,
    Sports,
    Entertainment,
    Technology,
    War,
    Nearby,
}

impl FeedCategory {
    pub const ALL: [FeedCategory; 8] = [
        FeedCategory::All,
        FeedCategory::Geopolitics,
        FeedCategory::Business,
        FeedCategory::Sports,
        FeedCategory::Entertainment,
        FeedCategory::Technology,
        FeedCategory::War,
        FeedCategory::Nearby,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedCategory::All => "all",
            FeedCategory::Geopolitics => "geopolitics",
            FeedCategory::Business => "business",
            FeedCategory::Sports => "sports",
            FeedCategory::Entertainment => "entertainment",
            FeedCategory::Technology => "technology",
            FeedCategory::War => "war",
            FeedCategory::Nearby => "nearby",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedCategory::All => "All News",
            FeedCategory::Geopolitics => "Geopolitics",
            FeedCategory::Business => "Business",
            FeedCategory::Sports => "Sports",
            FeedCategory::Entertainment => "Entertainment",
            FeedCategory::Technology => "Technology",
            FeedCategory::War => "War",
            FeedCategory::Nearby => "Nearby",
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            FeedCategory::All => true,
            other => article.category == other.as_str(),
        }
    }
}

impl fmt::Display for FeedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// 按分类筛选，再对标题、摘要、作者、分类做不区分大小写的子串搜索
///
/// 空白查询不做搜索过滤。
pub fn filter_feed<'a>(articles: &'a [Article], category: FeedCategory, query: &str) -> Vec<&'a Article> {
    let query = query.trim().to_lowercase();
    articles
        .iter()
        .filter(|a| category.matches(a))
        .filter(|a| query.is_empty() || matches_query(a, &query))
        .collect()
}

fn matches_query(article: &Article, query: &str) -> bool {
    [&article.title, &article.excerpt, &article.author, &article.category]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

pub const TRENDING_COUNT: usize = 3;

/// 可信度最高的前 n 篇，同分保持原顺序
pub fn trending(articles: &[Article], n: usize) -> Vec<&Article> {
    let mut ranked: Vec<&Article> = articles.iter().collect();
    // sort_by 是稳定排序
    ranked.sort_by(|a, b| b.reliability_score.total_cmp(&a.reliability_score));
    ranked.truncate(n);
    ranked
}

/// 可信度色阶
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReliabilityTier {
    High,
    Medium,
    Low,
}

impl ReliabilityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReliabilityTier::High => "high",
            ReliabilityTier::Medium => "medium",
            ReliabilityTier::Low => "low",
        }
    }
}

pub fn reliability_tier(score: f64) -> ReliabilityTier {
    if score >= 7.0 {
        ReliabilityTier::High
    } else if score >= 5.0 {
        ReliabilityTier::Medium
    } else {
        ReliabilityTier::Low
    }
}

pub fn reliability_label(score: f64) -> &'static str {
    if score >= 8.5 {
        "Highly Reliable"
    } else if score >= 7.0 {
        "Reliable"
    } else if score >= 5.0 {
        "Moderately Reliable"
    } else if score >= 3.0 {
        "Low Reliability"
    } else {
        "Unreliable"
    }
}
