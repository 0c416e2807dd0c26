//! 标题可信度核验
//!
//! 与文章浏览不同，这条路径失败即报错：伪造一个结果比没有结果更糟。

use nationpost_shared::chrono::NaiveDate;
use nationpost_shared::date::{parse_date, today};
use nationpost_shared::protocol::{ApiRequest, VerifyRequest};
use serde_json::Value;

use crate::api::{NationPostApi, backend_message_field};
use crate::error::{ClientError, ClientResult};
use crate::news::truncate_words;
use crate::request::{HttpClient, HttpRequest};

pub const SUMMARY_WORD_LIMIT: usize = 150;
pub const LOW_SCORE_THRESHOLD: f64 = 5.0;
pub const VERIFIED_THRESHOLD: f64 = 6.0;

pub const FLAG_MISLEADING: &str = "Potentially misleading information detected";
pub const FLAG_NO_EVIDENCE: &str = "No corroborating sources found";
pub const FLAG_LOW_SCORE: &str = "Low credibility score";

const UNKNOWN_PREDICTION: &str = "UNKNOWN";
const UNKNOWN_SOURCE: &str = "Unknown source";
const NO_ANALYSIS: &str = "No analysis available";

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    pub prediction: String,
    pub score: f64,
    pub confidence: f64,
    /// 后端分析文字，截断到 150 词
    pub summary: String,
    /// 佐证来源的标题
    pub sources: Vec<String>,
    pub flags: Vec<String>,
}

impl VerificationResult {
    /// 把后端响应映射为展示用结果
    pub fn from_response(data: &Value) -> Self {
        let prediction = data
            .get("prediction")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_PREDICTION)
            .to_string();

        let raw_score = data.get("score").and_then(numeric);

        let sources = match data.get("sources") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|s| {
                    s.get("title")
                        .and_then(Value::as_str)
                        .filter(|t| !t.is_empty())
                        .unwrap_or(UNKNOWN_SOURCE)
                        .to_string()
                })
                .collect(),
            _ => Vec::new(),
        };

        let reason = data
            .get("reason")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(NO_ANALYSIS);

        Self {
            flags: derive_flags(&prediction, raw_score),
            prediction,
            score: raw_score.unwrap_or(0.0),
            confidence: data.get("confidence").and_then(numeric).unwrap_or(0.0),
            summary: truncate_words(reason, SUMMARY_WORD_LIMIT),
            sources,
        }
    }
}

/// 由预测标签和分数确定性地得出提示
///
/// 分数缺失时不产生低分提示。
pub fn derive_flags(prediction: &str, score: Option<f64>) -> Vec<String> {
    let mut flags = Vec::new();
    if prediction.contains("FAKE") {
        flags.push(FLAG_MISLEADING.to_string());
    }
    if prediction.contains("NO EVIDENCE") {
        flags.push(FLAG_NO_EVIDENCE.to_string());
    }
    if score.is_some_and(|s| s < LOW_SCORE_THRESHOLD) {
        flags.push(FLAG_LOW_SCORE.to_string());
    }
    flags
}

/// 数字或可解析为数字的字符串
fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// 提交一条标题做可信度核验
///
/// 空白标题直接返回 `Validation` 错误，不发请求；
/// 网络错误、非 2xx、响应无法解析都返回 `Verification` 错误。
pub async fn submit_verification<C: HttpClient>(
    api: &NationPostApi<C>,
    headline: &str,
    context: &str,
    source_url: Option<&str>,
) -> ClientResult<VerificationResult> {
    if headline.trim().is_empty() {
        return Err(ClientError::validation("Headline is required").in_op("verification.submit"));
    }

    let request = VerifyRequest {
        headline: headline.to_string(),
        description: context.to_string(),
        url: source_url.filter(|u| !u.trim().is_empty()).map(str::to_string),
    };
    let http = HttpRequest::new(&api.url(&request.path()), VerifyRequest::METHOD)
        .with_json(serde_json::to_value(&request)?);

    let resp = api
        .send(http)
        .await
        .map_err(|e| into_verification(e).in_op("verification.submit"))?;

    if !resp.ok() {
        let message = backend_message_field(&resp.body, "error")
            .unwrap_or_else(|| format!("Verification failed: {}", resp.status));
        return Err(ClientError::verification(message).in_op("verification.submit"));
    }

    let data: Value = resp
        .json()
        .map_err(|e| into_verification(e).in_op("verification.submit"))?;
    let result = VerificationResult::from_response(&data);
    tracing::info!(score = result.score, prediction = %result.prediction, "headline verified");
    Ok(result)
}

fn into_verification(e: ClientError) -> ClientError {
    let message = e.message().to_string();
    ClientError::verification(message).with_source(e)
}

// =========================================================
// 核验历史
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    Verified,
    Flagged,
}

impl VerificationStatus {
    pub fn for_score(score: f64) -> Self {
        if score >= VERIFIED_THRESHOLD {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Flagged
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "verified",
            VerificationStatus::Flagged => "flagged",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub headline: String,
    pub score: f64,
    pub date: NaiveDate,
    pub status: VerificationStatus,
}

/// 本次会话内的核验记录，新的在前
#[derive(Debug, Clone)]
pub struct VerificationHistory {
    entries: Vec<HistoryEntry>,
}

impl Default for VerificationHistory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl VerificationHistory {
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// 带三条示例记录
    pub fn seeded() -> Self {
        let seed = [
            ("1", "Global Climate Summit Reaches Agreement", 8.4, "2024-12-20"),
            ("2", "Tech Stocks Rise 15% After Earnings", 7.6, "2024-12-19"),
            ("3", "Unconfirmed Reports of Market Crash", 3.0, "2024-12-18"),
        ];
        let entries = seed
            .into_iter()
            .filter_map(|(id, headline, score, date)| {
                Some(HistoryEntry {
                    id: id.to_string(),
                    headline: headline.to_string(),
                    score,
                    date: parse_date(date)?,
                    status: VerificationStatus::for_score(score),
                })
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 记录一次成功的核验
    pub fn record(&mut self, headline: &str, result: &VerificationResult) -> &HistoryEntry {
        self.record_on(headline, result, today())
    }

    pub fn record_on(&mut self, headline: &str, result: &VerificationResult, date: NaiveDate) -> &HistoryEntry {
        self.entries.insert(
            0,
            HistoryEntry {
                id: uuid::Uuid::new_v4().to_string(),
                headline: headline.to_string(),
                score: result.score,
                date,
                status: VerificationStatus::for_score(result.score),
            },
        );
        &self.entries[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ClientErrorKind;
    use crate::request::{HttpBody, MockHttpClient};
    use serde_json::json;

    const VERIFY_URL: &str = "http://backend.test/verify";

    fn api() -> NationPostApi<MockHttpClient> {
        NationPostApi::new(
            ClientConfig::new("http://backend.test", "https://gw.test/ipfs/"),
            MockHttpClient::new(),
        )
    }

    #[tokio::test]
    async fn blank_headline_is_rejected_before_network() {
        let api = api();
        let err = submit_verification(&api, "   ", "", None).await.unwrap_err();
        assert_eq!(err.kind, ClientErrorKind::Validation);
        assert_eq!(api.client().request_count(), 0);
    }

    #[tokio::test]
    async fn response_is_mapped_and_flagged() {
        let api = api();
        api.client().mock_response(
            VERIFY_URL,
            200,
            json!({
                "prediction": "LIKELY FAKE",
                "confidence": 0.82,
                "score": 3.5,
                "reason": "Contradicted by several outlets",
                "sources": [{"title": "Outlet A"}, {"url": "https://b.test"}]
            }),
        );

        let result = submit_verification(&api, "Moon made of cheese", "", None)
            .await
            .unwrap();
        assert_eq!(result.score, 3.5);
        assert_eq!(result.confidence, 0.82);
        assert_eq!(result.summary, "Contradicted by several outlets");
        assert_eq!(result.sources, vec!["Outlet A", "Unknown source"]);
        assert_eq!(result.flags, vec![FLAG_MISLEADING, FLAG_LOW_SCORE]);
    }

    #[tokio::test]
    async fn request_body_omits_empty_url() {
        let api = api();
        api.client().mock_response(VERIFY_URL, 200, json!({"score": 8}));

        submit_verification(&api, "Headline", "context", Some("")).await.unwrap();

        match api.client().last_request().unwrap().body {
            Some(HttpBody::Json(body)) => {
                let body: Value = serde_json::from_str(&body).unwrap();
                assert_eq!(body["headline"], "Headline");
                assert_eq!(body["description"], "context");
                assert!(body.get("url").is_none());
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[tokio::test]
    async fn backend_error_prefers_error_field() {
        let api = api();
        api.client()
            .mock_response(VERIFY_URL, 503, json!({"error": "model offline"}));

        let err = submit_verification(&api, "Headline", "", None).await.unwrap_err();
        assert_eq!(err.kind, ClientErrorKind::Verification);
        assert_eq!(err.message(), "model offline");
    }

    #[tokio::test]
    async fn backend_error_without_body_uses_status() {
        let api = api();
        api.client().mock_text(VERIFY_URL, 500, "oops");

        let err = submit_verification(&api, "Headline", "", None).await.unwrap_err();
        assert_eq!(err.message(), "Verification failed: 500");
    }

    #[tokio::test]
    async fn network_failure_is_surfaced() {
        let api = api();
        api.client().mock_unreachable(VERIFY_URL);

        let err = submit_verification(&api, "Headline", "", None).await.unwrap_err();
        assert_eq!(err.kind, ClientErrorKind::Verification);
    }

    #[test]
    fn defaults_for_missing_fields() {
        let result = VerificationResult::from_response(&json!({"score": "n/a"}));
        assert_eq!(result.prediction, "UNKNOWN");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.summary, "No analysis available");
        assert!(result.sources.is_empty());
        assert!(result.flags.is_empty());
    }

    #[test]
    fn no_evidence_flag_and_long_reason() {
        let reason = vec!["word"; 160].join(" ");
        let result = VerificationResult::from_response(&json!({
            "prediction": "NO EVIDENCE",
            "score": 6,
            "reason": reason,
        }));
        assert_eq!(result.flags, vec![FLAG_NO_EVIDENCE]);
        assert!(result.summary.ends_with("..."));
        assert_eq!(result.summary.split_whitespace().count(), 150);
    }

    #[test]
    fn history_is_seeded_and_prepends() {
        let mut history = VerificationHistory::seeded();
        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[2].status, VerificationStatus::Flagged);

        let result = VerificationResult::from_response(&json!({"score": 5.9}));
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let entry = history.record_on("New claim", &result, date).clone();
        assert_eq!(entry.status, VerificationStatus::Flagged);
        assert_eq!(history.entries()[0], entry);
        assert_eq!(history.len(), 4);

        let result = VerificationResult::from_response(&json!({"score": 6}));
        history.record("Another", &result);
        assert_eq!(history.entries()[0].status, VerificationStatus::Verified);
    }
}
