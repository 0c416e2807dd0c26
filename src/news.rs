//! 新闻目录
//!
//! 从后端拉取文章并归一化；浏览流程永不失败：任何错误都回退到样例数据。

use nationpost_shared::Article;
use nationpost_shared::date::now_iso;
use nationpost_shared::protocol::{ArticleByIdRequest, ListArticlesRequest};
use serde_json::Value;

use crate::api::NationPostApi;
use crate::error::{ClientError, ClientResult};
use crate::request::HttpClient;

pub mod normalize;
mod sample;


pub use normalize::{excerpt_from, normalize_article, resolve_thumbnail, truncate_words};
pub use sample::sample_articles;

pub struct NewsDirectory<'a, C: HttpClient> {
    api: &'a NationPostApi<C>,
}

impl<'a, C: HttpClient> NewsDirectory<'a, C> {
    pub fn new(api: &'a NationPostApi<C>) -> Self {
        Self { api }
    }

    pub fn list_sample(&self) -> Vec<Article> {
        sample_articles()
    }

    /// 拉取文章列表，失败时记录警告并返回样例集合，永不向调用方传播错误
    pub async fn fetch_remote_list(&self) -> Vec<Article> {
        match self.try_fetch_list().await {
            Ok(articles) => articles,
            Err(e) => {
                tracing::warn!(error = %e, "fetch_remote_list failed, returning sample data");
                sample_articles()
            }
        }
    }

    /// 按 id 拉取一篇文章；后端失败时在样例集合中查找，仍找不到则返回 `None`
    pub async fn fetch_article_by_id(&self, id: &str) -> Option<Article> {
        match self.try_fetch_article(id).await {
            Ok(article) => Some(article),
            Err(e) => {
                tracing::warn!(error = %e, id, "fetch_article_by_id failed, searching sample data");
                sample_articles().into_iter().find(|a| a.id == id)
            }
        }
    }

    pub async fn try_fetch_list(&self) -> ClientResult<Vec<Article>> {
        let body = self
            .api
            .call(&ListArticlesRequest)
            .await
            .map_err(|e| e.in_op("news.fetch_list"))?;

        let items = match body {
            Value::Array(items) => items,
            _ => {
                return Err(ClientError::decode("Unexpected list format").in_op("news.fetch_list"));
            }
        };

        let now = now_iso();
        let gateway = &self.api.config().ipfs_gateway_url;
        Ok(items
            .iter()
            .map(|item| normalize_article(item, gateway, &now))
            .collect())
    }

    pub async fn try_fetch_article(&self, id: &str) -> ClientResult<Article> {
        let req = ArticleByIdRequest { id: id.to_string() };
        let body = self
            .api
            .call(&req)
            .await
            .map_err(|e| e.in_op_with("news.fetch_by_id", id))?;

        if !body.is_object() {
            return Err(
                ClientError::decode("Unexpected article format").in_op_with("news.fetch_by_id", id)
            );
        }

        Ok(normalize_article(
            &body,
            &self.api.config().ipfs_gateway_url,
            &now_iso(),
        ))
    }
}
