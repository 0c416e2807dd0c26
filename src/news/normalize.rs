//! 后端文章 JSON 的归一化
//!
//! 后端返回的对象字段名并不统一，这里是唯一解决该歧义的地方，列表与按 id 查询共用。
//! 每个字段按下表从左到右取第一个“有值”的来源（空字符串视为无值）：
//!
//! | 字段 | 来源优先级 | 缺省 |
//! |---|---|---|
//! | `id` | `metadata_hash`, `block_hash`, `id`, `_id` | `""` |
//! | `title` | `title`, `name` | `""` |
//! | `excerpt` | `description`（截断到 20 词）, `excerpt` | `""` |
//! | `thumbnail` | `thumbnail`, `ipfsHash`, `IpfsHash`, `files[0].ipfsHash`, `files[0].IpfsHash`, `metadata_hash`, `block_hash` | `""` |
//! | `reliabilityScore` | `verification.score`, `reliabilityScore`, `reliability`（仅数字） | `5.0` |
//! | `category` | `category`, `tags[0]` | `"general"` |
//! | `author` | `uploaded_by.name`, `author` | `"Unknown"` |
//! | `publishedAt` | `published_at`, `publishedAt`, `created_at` | 当前时间 |
//! | `blockHash` | `block_hash`, `blockHash` | 无 |

use nationpost_shared::{Article, DEFAULT_AUTHOR, DEFAULT_CATEGORY, DEFAULT_RELIABILITY};
use serde_json::Value;

pub const EXCERPT_WORD_LIMIT: usize = 20;
pub const ELLIPSIS: &str = "...";

type KeyPath = &'static [&'static str];

const ID_KEYS: &[KeyPath] = &[&["metadata_hash"], &["block_hash"], &["id"], &["_id"]];
const TITLE_KEYS: &[KeyPath] = &[&["title"], &["name"]];
const THUMBNAIL_KEYS: &[KeyPath] = &[
    &["thumbnail"],
    &["ipfsHash"],
    &["IpfsHash"],
    &["files", "0", "ipfsHash"],
    &["files", "0", "IpfsHash"],
    &["metadata_hash"],
    &["block_hash"],
];
const SCORE_KEYS: &[KeyPath] = &[&["verification", "score"], &["reliabilityScore"], &["reliability"]];
const CATEGORY_KEYS: &[KeyPath] = &[&["category"], &["tags", "0"]];
const AUTHOR_KEYS: &[KeyPath] = &[&["uploaded_by", "name"], &["author"]];
const PUBLISHED_KEYS: &[KeyPath] = &[&["published_at"], &["publishedAt"], &["created_at"]];
const BLOCK_HASH_KEYS: &[KeyPath] = &[&["block_hash"], &["blockHash"]];

/// 按词截断
///
/// 不超过 `limit` 个词时原样返回；否则取前 `limit` 个词，以单个空格连接并追加 `...`。
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= limit {
        return text.to_string();
    }
    format!("{}{}", words[..limit].join(" "), ELLIPSIS)
}

/// 摘要：描述文字截断到 20 词
pub fn excerpt_from(description: &str) -> String {
    truncate_words(description, EXCERPT_WORD_LIMIT)
}

/// 缩略图 URL：已经是 http(s) 绝对地址的原样保留，其余拼接到内容网关前缀后
pub fn resolve_thumbnail(raw: &str, gateway_url: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    if is_absolute_http(raw) {
        raw.to_string()
    } else {
        format!("{}{}", gateway_url, raw)
    }
}

fn is_absolute_http(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// 把一个后端 JSON 对象归一化为 `Article`
///
/// `now` 用作缺省发布时间，由调用方传入以保持本函数纯粹。
pub fn normalize_article(item: &Value, gateway_url: &str, now: &str) -> Article {
    let excerpt = match first_text(item, &[&["description"]]) {
        Some(description) => excerpt_from(&description),
        None => first_text(item, &[&["excerpt"]])
            .map(|e| excerpt_from(&e))
            .unwrap_or_default(),
    };

    let thumbnail = first_text(item, THUMBNAIL_KEYS)
        .map(|raw| resolve_thumbnail(&raw, gateway_url))
        .unwrap_or_default();

    let reliability_score = first_number(item, SCORE_KEYS)
        .unwrap_or(DEFAULT_RELIABILITY)
        .clamp(0.0, 10.0);

    Article {
        id: first_text(item, ID_KEYS).unwrap_or_default(),
        title: first_text(item, TITLE_KEYS).unwrap_or_default(),
        excerpt,
        thumbnail,
        reliability_score,
        category: first_text(item, CATEGORY_KEYS).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        author: first_text(item, AUTHOR_KEYS).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        published_at: first_text(item, PUBLISHED_KEYS).unwrap_or_else(|| now.to_string()),
        block_hash: first_text(item, BLOCK_HASH_KEYS),
    }
}

fn lookup<'v>(item: &'v Value, path: KeyPath) -> Option<&'v Value> {
    path.iter().try_fold(item, |current, segment| match current {
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        Value::Object(map) => map.get(*segment),
        _ => None,
    })
}

fn first_text(item: &Value, paths: &[KeyPath]) -> Option<String> {
    paths.iter().find_map(|path| match lookup(item, path)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn first_number(item: &Value, paths: &[KeyPath]) -> Option<f64> {
    paths
        .iter()
        .find_map(|path| lookup(item, path).and_then(Value::as_f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const GATEWAY: &str = "https://gw.test/ipfs/";
    const NOW: &str = "2025-11-20T00:00:00.000Z";

    fn words(n: usize) -> String {
        (1..=n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn long_description_is_cut_to_twenty_words() {
        let excerpt = excerpt_from(&words(25));
        assert_eq!(excerpt, format!("{}...", words(20)));
        assert_eq!(excerpt.trim_end_matches("...").split(' ').count(), 20);
    }

    #[test]
    fn short_description_is_kept() {
        assert_eq!(excerpt_from(&words(20)), words(20));
        assert_eq!(excerpt_from("one two"), "one two");
    }

    #[test]
    fn absolute_thumbnails_are_untouched() {
        for raw in ["https://cdn.test/a.jpg", "http://cdn.test/b.png", "HTTPS://CDN.test/c"] {
            assert_eq!(resolve_thumbnail(raw, GATEWAY), raw);
        }
    }

    #[test]
    fn content_ids_go_through_gateway() {
        assert_eq!(resolve_thumbnail("QmAbc", GATEWAY), "https://gw.test/ipfs/QmAbc");
        assert_eq!(resolve_thumbnail("ftp://x", GATEWAY), "https://gw.test/ipfs/ftp://x");
        assert_eq!(resolve_thumbnail("", GATEWAY), "");
    }

    #[test]
    fn backend_dashboard_shape() {
        let item = json!({
            "title": "Boeing order",
            "description": words(30),
            "category": "business",
            "uploaded_by": {"name": "Chirmiri Patil", "userID": "u1"},
            "published_at": "2025-11-18",
            "block_hash": "0xblock",
            "metadata_hash": "QmMeta",
            "files": [{"ipfsHash": "QmFile"}],
            "verification": {"score": 8.6}
        });

        let article = normalize_article(&item, GATEWAY, NOW);
        assert_eq!(article.id, "QmMeta");
        assert_eq!(article.title, "Boeing order");
        assert!(article.excerpt.ends_with("..."));
        assert_eq!(article.thumbnail, "https://gw.test/ipfs/QmFile");
        assert_eq!(article.reliability_score, 8.6);
        assert_eq!(article.category, "business");
        assert_eq!(article.author, "Chirmiri Patil");
        assert_eq!(article.published_at, "2025-11-18");
        assert_eq!(article.block_hash.as_deref(), Some("0xblock"));
    }

    #[test]
    fn alternate_keys_and_defaults() {
        let item = json!({
            "_id": 42,
            "name": "Fallback title",
            "excerpt": "Short excerpt",
            "tags": ["war", "nearby"],
            "author": "Desk",
            "created_at": "2025-01-01",
            "reliability": 3.2,
            "blockHash": "abc"
        });

        let article = normalize_article(&item, GATEWAY, NOW);
        assert_eq!(article.id, "42");
        assert_eq!(article.title, "Fallback title");
        assert_eq!(article.excerpt, "Short excerpt");
        assert_eq!(article.thumbnail, "");
        assert_eq!(article.reliability_score, 3.2);
        assert_eq!(article.category, "war");
        assert_eq!(article.author, "Desk");
        assert_eq!(article.published_at, "2025-01-01");
        assert_eq!(article.block_hash.as_deref(), Some("abc"));
    }

    #[test]
    fn empty_object_gets_all_defaults() {
        let article = normalize_article(&json!({}), GATEWAY, NOW);
        assert_eq!(article.id, "");
        assert_eq!(article.reliability_score, 5.0);
        assert_eq!(article.category, "general");
        assert_eq!(article.author, "Unknown");
        assert_eq!(article.published_at, NOW);
        assert_eq!(article.block_hash, None);
    }

    #[test]
    fn empty_strings_fall_through_priority_list() {
        let item = json!({"metadata_hash": "", "block_hash": "blk", "category": ""});
        let article = normalize_article(&item, GATEWAY, NOW);
        assert_eq!(article.id, "blk");
        assert_eq!(article.category, "general");
        assert_eq!(article.thumbnail, "https://gw.test/ipfs/blk");
    }

    #[test]
    fn non_numeric_scores_are_ignored_and_range_is_clamped() {
        let item = json!({"verification": {"score": "9"}, "reliabilityScore": 14});
        assert_eq!(normalize_article(&item, GATEWAY, NOW).reliability_score, 10.0);

        let item = json!({"verification": {"score": "high"}});
        assert_eq!(normalize_article(&item, GATEWAY, NOW).reliability_score, 5.0);
    }
}
