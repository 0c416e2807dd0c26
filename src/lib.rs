//! Nation Post 客户端核心
//!
//! 与平台无关的状态与业务逻辑：会话、主题、页面导航、新闻目录、核验与投稿。
//! 浏览器相关的实现（fetch、Web Storage、剪贴板）由前端通过 `HttpClient` 与
//! `KeyValueStore` 两个 trait 注入。

pub mod api;
pub mod block;
pub mod config;
pub mod error;
pub mod feed;
pub mod forms;
pub mod navigation;
pub mod news;
pub mod request;
pub mod session;
pub mod storage;
pub mod theme;
pub mod token;
pub mod upload;
pub mod verification;

pub use nationpost_shared as shared;
pub use nationpost_shared::{Article, Role, Session, Theme};

pub use api::NationPostApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientErrorKind, ClientResult};
pub use navigation::{NavEvent, NavState, Navigator, Page};
pub use news::NewsDirectory;
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use session::{AuthService, RemoteAuth, SessionStore, SimulatedAuth};
pub use storage::{KeyValueStore, MemoryStorage, StorageScopes};
pub use theme::ThemeStore;
