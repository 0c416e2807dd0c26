//! 文章投稿
//!
//! 以 multipart 表单提交到 `/upload/`，字段名按后端约定改写。

use nationpost_shared::protocol::{HttpMethod, UPLOAD_PATH};
use nationpost_shared::{DEFAULT_RELIABILITY, HEADER_AUTHORIZATION};
use serde_json::Value;

use crate::api::NationPostApi;
use crate::error::{ClientError, ClientResult};
use crate::request::{FormPart, HttpClient, HttpRequest};
use crate::storage::{KeyValueStore, StorageScopes};
use crate::token::{decode_claims_lossy, find_bearer_token};

/// 投稿可选分类，值即后端接收的字符串
pub const UPLOAD_CATEGORIES: [(&str, &str); 8] = [
    ("geopolitics", "Geopolitics"),
    ("politics", "Politics"),
    ("business", "Business"),
    ("sports", "Sports"),
    ("entertainment", "Entertainment"),
    ("technology", "Technology"),
    ("war", "War"),
    ("nearby", "Nearby"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSubmission {
    pub title: String,
    pub category: String,
    pub description: String,
    /// 来源链接，可为空
    pub source: String,
}

impl ArticleSubmission {
    pub fn validate(&self) -> ClientResult<()> {
        let missing = [&self.title, &self.category, &self.description]
            .iter()
            .any(|field| field.trim().is_empty());
        if missing {
            return Err(ClientError::validation("Please fill in all required fields"));
        }
        Ok(())
    }
}

/// 随稿件附带的配图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UploadReceipt {
    /// 后端给出的可信度评分，缺失时为 5.0
    pub score: f64,
}

/// 组装 multipart 字段
///
/// `userID` / `name` 只在 token 可解码且含有对应字段时附带。
fn form_parts(fields: &ArticleSubmission, image: Option<ImageFile>, token: Option<&str>) -> Vec<FormPart> {
    let mut parts = vec![
        FormPart::text("title", &fields.title),
        FormPart::text("category", &fields.category),
        FormPart::text("description", &fields.description),
        FormPart::text("source", &fields.source),
    ];

    if let Some(image) = image {
        parts.push(FormPart::File {
            name: "files".to_string(),
            file_name: image.file_name,
            content_type: image.content_type,
            bytes: image.bytes,
        });
    }

    if let Some(token) = token {
        let claims = decode_claims_lossy(token);
        if let Some(user_id) = claims.user_id {
            parts.push(FormPart::text("userID", &user_id));
        }
        if let Some(name) = claims.name {
            parts.push(FormPart::text("name", &name));
        }
    }

    parts
}

/// 提交一篇文章
///
/// 必填字段缺失时返回 `Validation` 错误，不发请求。
pub async fn submit_article<C, P, S>(
    api: &NationPostApi<C>,
    scopes: &StorageScopes<P, S>,
    fields: &ArticleSubmission,
    image: Option<ImageFile>,
) -> ClientResult<UploadReceipt>
where
    C: HttpClient,
    P: KeyValueStore,
    S: KeyValueStore,
{
    fields.validate().map_err(|e| e.in_op("upload.submit"))?;

    let token = find_bearer_token(scopes);
    tracing::debug!(token_present = token.is_some(), title = %fields.title, "submitting article");

    let mut req = HttpRequest::new(&api.url(UPLOAD_PATH), HttpMethod::Post)
        .with_multipart(form_parts(fields, image, token.as_deref()));
    if let Some(token) = &token {
        req = req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
    }

    let resp = api.send(req).await.map_err(|e| e.in_op("upload.submit"))?;
    if !resp.ok() {
        let message = if resp.body.trim().is_empty() {
            format!("Upload failed: {}", resp.status)
        } else {
            resp.body.clone()
        };
        tracing::warn!(status = resp.status, "upload rejected");
        return Err(ClientError::backend(resp.status, message).in_op("upload.submit"));
    }

    let data: Value = resp.json().map_err(|e| e.in_op("upload.submit"))?;
    let score = data
        .get("verification")
        .and_then(|v| v.get("score"))
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_RELIABILITY);

    tracing::info!(score, "article uploaded");
    Ok(UploadReceipt { score })
}
