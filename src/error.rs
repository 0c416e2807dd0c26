use std::fmt;

use serde::{Deserialize, Serialize};

// =========================================================
// 错误类别枚举
// =========================================================

/// 错误类别
///
/// 决定错误在界面上的处理方式：浏览类流程吞掉 `Network`/`Backend` 并回退到样例数据，
/// 认证与校验类流程把它们展示给用户。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientErrorKind {
    /// 本地表单校验失败，未发出任何请求
    Validation,
    /// 登录凭据无效
    InvalidCredentials,
    /// 注册信息无效
    InvalidRegistration,
    /// 资源冲突（如邮箱已注册）
    Conflict,
    /// 请求未能完成（连接失败、超时）
    Network,
    /// 后端返回非 2xx 状态码
    Backend { status: u16 },
    /// 持久化记录或响应体无法解析
    Decode,
    /// 新闻标题校验失败
    Verification,
    /// 资源不存在
    NotFound,
    /// 本地存储读写失败
    Storage,
}

impl ClientErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientErrorKind::Validation => "VALIDATION_ERROR",
            ClientErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
            ClientErrorKind::InvalidRegistration => "INVALID_REGISTRATION",
            ClientErrorKind::Conflict => "RESOURCE_CONFLICT",
            ClientErrorKind::Network => "NETWORK_ERROR",
            ClientErrorKind::Backend { .. } => "BACKEND_ERROR",
            ClientErrorKind::Decode => "DECODE_ERROR",
            ClientErrorKind::Verification => "VERIFICATION_ERROR",
            ClientErrorKind::NotFound => "RESOURCE_NOT_FOUND",
            ClientErrorKind::Storage => "STORAGE_ERROR",
        }
    }

    /// 后端状态码（仅 `Backend` 类别有）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientErrorKind::Backend { status } => Some(*status),
            _ => None,
        }
    }
}

// =========================================================
// 错误上下文追踪
// =========================================================

/// 结构化的错误追踪片段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSpan {
    /// 操作名称，如 "news.fetch_list", "session.login"
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorSpan {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: None,
        }
    }

    pub fn with_detail(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: Some(detail.into()),
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// 客户端错误
///
/// - kind: 错误类别
/// - message: 面向用户的消息
/// - source: 原始错误（可选）
/// - spans: 操作追踪栈
#[derive(Debug)]
pub struct ClientError {
    pub kind: ClientErrorKind,
    pub message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
    spans: Vec<ErrorSpan>,
}

impl ClientError {
    pub fn new(kind: ClientErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Validation, message)
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::InvalidCredentials, message)
    }

    pub fn invalid_registration(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::InvalidRegistration, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Conflict, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Network, message)
    }

    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Backend { status }, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Decode, message)
    }

    pub fn verification(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Verification, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::NotFound, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Storage, message)
    }

    // --- Context builders ---

    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::new(operation));
        self
    }

    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::with_detail(operation, detail));
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // --- Accessors ---

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }

    /// 请求是否根本没有拿到可用响应（网络失败或后端非 2xx）
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ClientErrorKind::Network | ClientErrorKind::Backend { .. }
        )
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)?;

        if !self.spans.is_empty() {
            write!(f, " | trace: ")?;
            for (i, span) in self.spans.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", span.operation)?;
                if let Some(detail) = &span.detail {
                    write!(f, "({})", detail)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

// =========================================================
// 类型转换实现
// =========================================================

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::decode(e.to_string()).with_source(e)
    }
}

impl From<base64::DecodeError> for ClientError {
    fn from(e: base64::DecodeError) -> Self {
        ClientError::decode(e.to_string()).with_source(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_trace() {
        let err = ClientError::backend(500, "boom")
            .in_op("news.fetch_list")
            .in_op_with("api.get", "/dashboard/list");
        assert_eq!(
            err.to_string(),
            "[BACKEND_ERROR] boom | trace: news.fetch_list -> api.get(/dashboard/list)"
        );
        assert_eq!(err.kind.status_code(), Some(500));
    }

    #[test]
    fn transport_errors_are_classified() {
        assert!(ClientError::network("offline").is_transport());
        assert!(ClientError::backend(404, "missing").is_transport());
        assert!(!ClientError::validation("empty").is_transport());
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: ClientError = parse.unwrap_err().into();
        assert_eq!(err.kind, ClientErrorKind::Decode);
        assert!(std::error::Error::source(&err).is_some());
    }
}
