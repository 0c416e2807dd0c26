use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod date;
pub mod protocol;

pub use chrono;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 持久化会话记录的存储键
pub const STORAGE_SESSION_KEY: &str = "nationpost_user";
/// Bearer token 的存储键（先查 localStorage，再查 sessionStorage）
pub const STORAGE_TOKEN_KEY: &str = "authToken";
/// 主题偏好的存储键
pub const STORAGE_THEME_KEY: &str = "nationpost_theme";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// 后端未给出评分时使用的默认可信度
pub const DEFAULT_RELIABILITY: f64 = 5.0;
pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_AUTHOR: &str = "Unknown";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 新闻条目
///
/// 构造后不再修改；由样例数据或后端 JSON 归一化得到。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// 为空，或是一个绝对 URL
    pub thumbnail: String,
    pub reliability_score: f64,
    pub category: String,
    pub author: String,
    pub published_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    Moderator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Moderator => "moderator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已登录用户身份
///
/// 要么完整存在（已登录），要么不存在（匿名），没有中间状态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
    pub join_date: chrono::NaiveDate,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}
