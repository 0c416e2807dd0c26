use nationpost_shared::protocol::{ApiRequest, HttpMethod};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::request::{HttpClient, HttpRequest, HttpResponse};

// =========================================================
// API 网关
// =========================================================

/// 后端 API 网关
///
/// 持有配置与 HTTP 客户端，所有对后端的调用都经过这里。
/// 这里接受任何实现了 HttpClient 的客户端，从而解耦了具体的 HTTP 实现。
pub struct NationPostApi<C: HttpClient> {
    config: ClientConfig,
    client: C,
}

impl<C: HttpClient> NationPostApi<C> {
    pub fn new(config: ClientConfig, client: C) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// 发送原始请求，不检查状态码
    pub async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        tracing::debug!(method = req.method.as_str(), url = %req.url, "backend request");
        self.client
            .send(req)
            .await
            .map_err(|e| e.in_op("api.send"))
    }

    /// 调用一个 JSON 端点
    ///
    /// 非 2xx 转为 `Backend { status }` 错误，消息优先取响应体里的 `message` / `error`。
    pub async fn call<R: ApiRequest>(&self, request: &R) -> ClientResult<R::Response> {
        let path = request.path();
        let url = self.url(&path);
        let req = match R::METHOD {
            HttpMethod::Get => HttpRequest::new(&url, HttpMethod::Get),
            HttpMethod::Post => {
                HttpRequest::new(&url, HttpMethod::Post).with_json(serde_json::to_value(request)?)
            }
        };

        let resp = self.send(req).await.map_err(|e| e.in_op_with("api.call", &path))?;
        let resp = ensure_success(resp).map_err(|e| e.in_op_with("api.call", &path))?;
        resp.json::<R::Response>()
            .map_err(|e| e.in_op_with("api.call", &path))
    }
}

/// 非 2xx 响应转换为错误
pub fn ensure_success(resp: HttpResponse) -> ClientResult<HttpResponse> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = backend_message(&resp.body)
        .unwrap_or_else(|| format!("Request failed with status: {}", resp.status));
    Err(ClientError::backend(resp.status, message))
}

/// 从错误响应体中提取后端给出的说明
pub fn backend_message(body: &str) -> Option<String> {
    backend_message_field(body, "message").or_else(|| backend_message_field(body, "error"))
}

/// 读取 JSON 响应体中某个非空字符串字段
pub fn backend_message_field(body: &str, key: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}
