//! 区块哈希核验（模拟）
//!
//! 这里没有真正的哈希链：区块号与确认数是随机生成的展示值，
//! “上一个哈希”只是把当前哈希反转。匹配只在随包样例中进行。

use std::ops::Range;

use nationpost_shared::Article;
use rand::Rng;

use crate::error::{ClientError, ClientResult};

pub const BLOCK_NUMBER_RANGE: Range<u64> = 50_000..150_000;
pub const CONFIRMATIONS_RANGE: Range<u64> = 500..1_500;
pub const PREVIOUS_HASH_LEN: usize = 64;
pub const NOT_FOUND_MESSAGE: &str = "Hash not found in blockchain";

#[derive(Debug, Clone, PartialEq)]
pub enum BlockVerification {
    Found {
        article: Article,
        block_number: u64,
        timestamp: String,
        previous_hash: String,
        confirmations: u64,
    },
    NotFound {
        message: String,
    },
}

impl BlockVerification {
    pub fn is_valid(&self) -> bool {
        matches!(self, BlockVerification::Found { .. })
    }
}

/// 反转后截取前 64 个字符
pub fn previous_hash(hash: &str) -> String {
    hash.chars().rev().take(PREVIOUS_HASH_LEN).collect()
}

/// 在给定文章中查找区块哈希
///
/// 比较前去掉输入两端空白，并且不区分大小写。空白输入返回 `Validation` 错误。
pub fn verify_block_hash<R: Rng + ?Sized>(
    input: &str,
    articles: &[Article],
    rng: &mut R,
) -> ClientResult<BlockVerification> {
    let needle = input.trim();
    if needle.is_empty() {
        return Err(ClientError::validation("Please enter a hash to verify").in_op("block.verify"));
    }

    let found = articles.iter().find(|article| {
        article
            .block_hash
            .as_deref()
            .is_some_and(|hash| hash.trim().eq_ignore_ascii_case(needle))
    });

    let Some(article) = found else {
        tracing::info!(hash = needle, "block hash not found");
        return Ok(BlockVerification::NotFound {
            message: NOT_FOUND_MESSAGE.to_string(),
        });
    };

    let hash = article.block_hash.as_deref().unwrap_or_default();
    Ok(BlockVerification::Found {
        block_number: rng.gen_range(BLOCK_NUMBER_RANGE),
        timestamp: article.published_at.clone(),
        previous_hash: previous_hash(hash),
        confirmations: rng.gen_range(CONFIRMATIONS_RANGE),
        article: article.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientErrorKind;
    use crate::news::sample_articles;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const HASH: &str = "e2c5a8f1d7b3e9c4a6d0f2b8c1e7a3d5f9b2c6e0a4d7f3b1c9e5a2f6d0c8b4";

    #[test]
    fn blank_input_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = verify_block_hash("  ", &sample_articles(), &mut rng).unwrap_err();
        assert_eq!(err.kind, ClientErrorKind::Validation);
    }

    #[test]
    fn match_ignores_case_and_whitespace() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = format!("  {}\n", HASH.to_uppercase());
        let result = verify_block_hash(&input, &sample_articles(), &mut rng).unwrap();

        match result {
            BlockVerification::Found {
                article,
                block_number,
                timestamp,
                previous_hash: prev,
                confirmations,
            } => {
                assert_eq!(article.id, "4");
                assert_eq!(timestamp, article.published_at);
                assert!(BLOCK_NUMBER_RANGE.contains(&block_number));
                assert!(CONFIRMATIONS_RANGE.contains(&confirmations));
                assert_eq!(prev, HASH.chars().rev().collect::<String>());
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn unknown_hash_is_not_found() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = verify_block_hash("deadbeef", &sample_articles(), &mut rng).unwrap();
        assert!(!result.is_valid());
        assert_eq!(
            result,
            BlockVerification::NotFound {
                message: NOT_FOUND_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn previous_hash_is_capped() {
        let long = "a".repeat(70) + "b";
        let prev = previous_hash(&long);
        assert_eq!(prev.len(), 64);
        assert!(prev.starts_with('b'));
        assert_eq!(previous_hash("abc"), "cba");
    }

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        let articles = sample_articles();
        for _ in 0..50 {
            if let BlockVerification::Found {
                block_number,
                confirmations,
                ..
            } = verify_block_hash(HASH, &articles, &mut rng).unwrap()
            {
                assert!((50_000..150_000).contains(&block_number));
                assert!((500..1_500).contains(&confirmations));
            }
        }
    }
}
