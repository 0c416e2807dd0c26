use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub use nationpost_shared::protocol::HttpMethod;

use crate::error::{ClientError, ClientResult};

#[cfg(test)]
use std::cell::RefCell;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// multipart 表单中的一个字段
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn text(name: &str, value: &str) -> Self {
        FormPart::Text {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// 请求体
#[derive(Debug, Clone, PartialEq)]
pub enum HttpBody {
    Json(String),
    Multipart(Vec<FormPart>),
}

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<HttpBody>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.headers.insert(
            nationpost_shared::HEADER_CONTENT_TYPE.to_string(),
            "application/json".to_string(),
        );
        self.body = Some(HttpBody::Json(body.to_string()));
        self
    }

    /// 边界由具体传输层生成，这里不设置 Content-Type
    pub fn with_multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = Some(HttpBody::Multipart(parts));
        self
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 是否 2xx
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_str(&self.body).map_err(ClientError::from)
    }
}

/// HTTP 客户端特性 (Trait)
///
/// 只有传输失败才返回 `Err(Network)`；任何 HTTP 状态码都视为一次成功的发送，
/// 由调用方决定如何处理非 2xx。
/// (?Send) 是因为浏览器环境下的 Future 不是 Send 的。
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse>;
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
pub struct MockHttpClient {
    // URL -> (Status, Response Body)
    responses: RefCell<HashMap<String, (u16, String)>>,
    // 模拟连接失败的 URL
    unreachable: RefCell<Vec<String>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            unreachable: RefCell::new(Vec::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn mock_response(&self, url: &str, status: u16, body: serde_json::Value) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), (status, body.to_string()));
    }

    pub fn mock_text(&self, url: &str, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), (status, body.to_string()));
    }

    pub fn mock_unreachable(&self, url: &str) {
        self.unreachable.borrow_mut().push(url.to_string());
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        self.requests.borrow_mut().push(req.clone());

        if self.unreachable.borrow().contains(&req.url) {
            return Err(ClientError::network(format!("connection refused: {}", req.url)));
        }

        let responses = self.responses.borrow();
        if let Some((status, body)) = responses.get(&req.url) {
            Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            })
        } else {
            Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            })
        }
    }
}

// =========================================================
// 测试工具: 基于 reqwest 的真实客户端
// =========================================================

#[cfg(test)]
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(test)]
impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &req.url);

        for (k, v) in req.headers {
            builder = builder.header(k, v);
        }

        match req.body {
            Some(HttpBody::Json(body)) => builder = builder.body(body),
            Some(HttpBody::Multipart(parts)) => {
                let mut form = reqwest::multipart::Form::new();
                for part in parts {
                    form = match part {
                        FormPart::Text { name, value } => form.text(name, value),
                        FormPart::File {
                            name,
                            file_name,
                            content_type,
                            bytes,
                        } => {
                            let file = reqwest::multipart::Part::bytes(bytes)
                                .file_name(file_name)
                                .mime_str(&content_type)
                                .map_err(|e| ClientError::validation(e.to_string()))?;
                            form.part(name, file)
                        }
                    };
                }
                builder = builder.multipart(form);
            }
            None => {}
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| ClientError::network(format!("Reqwest Error: {}", e)))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::network(format!("Reqwest Body Error: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
