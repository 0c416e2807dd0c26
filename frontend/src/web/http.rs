//! HTTP 请求封装模块
//!
//! 基于 `web_sys::fetch` 实现核心库的 `HttpClient`。
//! 只有请求无法完成时返回错误；任何状态码都原样交给调用方。

use async_trait::async_trait;
use nationpost::error::{ClientError, ClientResult};
use nationpost::request::{FormPart, HttpBody, HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestInit, Response};

fn js_err(context: &str, e: JsValue) -> ClientError {
    ClientError::network(format!("{}: {:?}", context, e))
}

/// 把 multipart 字段转换为浏览器的 `FormData`
///
/// Content-Type（含 boundary）由浏览器自动生成，因此这里不设置该请求头。
fn form_data(parts: &[FormPart]) -> ClientResult<FormData> {
    let form = FormData::new().map_err(|e| js_err("创建 FormData 失败", e))?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => form
                .append_with_str(name, value)
                .map_err(|e| js_err("追加表单字段失败", e))?,
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let chunk = js_sys::Uint8Array::from(bytes.as_slice());
                let chunks = js_sys::Array::of1(&chunk);
                let options = BlobPropertyBag::new();
                options.set_type(content_type);
                let blob = Blob::new_with_u8_array_sequence_and_options(&chunks, &options)
                    .map_err(|e| js_err("创建 Blob 失败", e))?;
                form.append_with_blob_and_filename(name, &blob, file_name)
                    .map_err(|e| js_err("追加文件失败", e))?;
            }
        }
    }
    Ok(form)
}

/// 基于 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let headers = Headers::new().map_err(|e| js_err("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_err("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        match &req.body {
            Some(HttpBody::Json(body)) => opts.set_body(&JsValue::from_str(body)),
            Some(HttpBody::Multipart(parts)) => opts.set_body(&form_data(parts)?.into()),
            None => {}
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| js_err("构建请求失败", e))?;

        let window = web_sys::window()
            .ok_or_else(|| ClientError::network("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_err("网络错误", e))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| js_err("Response 类型转换失败", e))?;

        let status = response.status();
        let text = response.text().map_err(|e| js_err("读取响应失败", e))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| js_err("读取响应失败", e))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
