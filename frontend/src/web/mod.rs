//! 浏览器 API 适配层
//!
//! 核心库只认识 `HttpClient` 与 `KeyValueStore` 两个 trait，
//! 这里用 `web_sys` 为它们提供浏览器实现，并集中处理 History 与剪贴板。

pub mod clipboard;
mod http;
pub mod router;
mod storage;

pub use http::FetchClient;
pub use storage::{WebLocalStorage, WebSessionStorage};
