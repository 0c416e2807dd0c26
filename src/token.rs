//! Bearer token 工具
//!
//! 上传时从本地存储取出 token，并在客户端解码其 payload 段以附带 userID / name。
//! 这是尽力而为的：解码失败只会省略这些字段，绝不中断上传。
//! 真正的身份必须由后端从验证过的 token 中得出，这里的解码结果不可作为信任依据。

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use nationpost_shared::STORAGE_TOKEN_KEY;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::storage::{KeyValueStore, StorageScopes};

/// 从 token payload 中提取出的可选身份字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: Option<String>,
    pub name: Option<String>,
}

/// 查找 bearer token：先查 primary（localStorage），再查 secondary（sessionStorage）
pub fn find_bearer_token<P: KeyValueStore, S: KeyValueStore>(
    scopes: &StorageScopes<P, S>,
) -> Option<String> {
    scopes.get_first(STORAGE_TOKEN_KEY)
}

/// 解码 JWT 的 payload 段（不校验签名）
pub fn decode_claims(token: &str) -> ClientResult<TokenClaims> {
    let segment = token
        .split('.')
        .nth(1)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ClientError::decode("token has no payload segment"))?;

    // 兼容标准 base64 字母表与残留的 padding
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(normalized.as_bytes())?;
    let payload: Value = serde_json::from_slice(&bytes)?;

    Ok(TokenClaims {
        user_id: claim_text(&payload, "userID"),
        name: claim_text(&payload, "name"),
    })
}

/// 尽力解码：失败时记录警告并返回空的 claims
pub fn decode_claims_lossy(token: &str) -> TokenClaims {
    match decode_claims(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(error = %e, "failed to decode bearer token payload");
            TokenClaims::default()
        }
    }
}

fn claim_text(payload: &Value, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) fn encode_test_token(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{}.{}.signature", header, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    #[test]
    fn decodes_user_id_and_name() {
        let token = encode_test_token(&json!({"userID": "u-42", "name": "Ada Lovelace", "exp": 1}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_id.as_deref(), Some("u-42"));
        assert_eq!(claims.name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn numeric_user_id_is_stringified() {
        let token = encode_test_token(&json!({"userID": 7}));
        assert_eq!(decode_claims(&token).unwrap().user_id.as_deref(), Some("7"));
    }

    #[test]
    fn malformed_tokens_are_decode_errors() {
        assert!(decode_claims("no-dots-here").is_err());
        assert!(decode_claims("a.%%%.c").is_err());
        assert!(decode_claims("a.bm90IGpzb24.c").is_err());
    }

    #[test]
    fn lossy_decode_swallows_failures() {
        assert_eq!(decode_claims_lossy("garbage"), TokenClaims::default());
    }

    #[test]
    fn token_lookup_checks_both_scopes() {
        let scopes = StorageScopes::new(MemoryStorage::new(), MemoryStorage::new());
        assert!(find_bearer_token(&scopes).is_none());
        scopes.secondary.set(STORAGE_TOKEN_KEY, "abc");
        assert_eq!(find_bearer_token(&scopes).as_deref(), Some("abc"));
    }
}
