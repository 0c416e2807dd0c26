//! 时间工具模块
//!
//! 前端与核心逻辑统一使用 chrono：
//! - `now_iso()`: 当前 UTC 时间的 RFC 3339 字符串（文章缺省发布时间）
//! - `today()`: 当前 UTC 日期（注册日期、校验历史）

use chrono::{NaiveDate, SecondsFormat, Utc};

/// 当前时间，毫秒精度的 ISO 8601 字符串，形如 `2025-11-20T08:30:00.000Z`
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 当前 UTC 日期
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// 尝试解析 `YYYY-MM-DD` 或完整的 RFC 3339 时间，只取日期部分
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// 用于页面展示的长日期，如 `December 20, 2024`；无法解析时原样返回
pub fn display_date(s: &str) -> String {
    match parse_date(s) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        assert_eq!(parse_date("2024-12-20"), Some(expected));
        assert_eq!(parse_date("2024-12-20T10:00:00.000Z"), Some(expected));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn display_date_falls_back_to_raw_text() {
        assert_eq!(display_date("2024-12-20"), "December 20, 2024");
        assert_eq!(display_date("yesterday"), "yesterday");
    }

    #[test]
    fn now_iso_is_parseable() {
        assert!(parse_date(&now_iso()).is_some());
    }
}
