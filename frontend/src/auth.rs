//! 认证模块
//!
//! 管理会话状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use leptos::prelude::*;
use nationpost::error::ClientResult;
use nationpost::{Session, SessionStore};

use crate::api::Services;
use crate::web::{WebLocalStorage, WebSessionStorage};

/// 认证上下文
///
/// 会话存储放在信号里，任何变更都会驱动依赖它的视图与路由守卫。
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: RwSignal<SessionStore<WebLocalStorage>>,
    services: Services,
}

impl AuthContext {
    /// 从 LocalStorage 恢复上次的会话
    pub fn load(services: Services) -> Self {
        Self {
            store: RwSignal::new(SessionStore::load(WebLocalStorage)),
            services,
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.store.with(|s| s.session().cloned())
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.is_authenticated()))
    }

    pub async fn login(self, email: String, password: String) -> ClientResult<()> {
        let auth = self.services.auth();
        let session = auth.login(&email, &password).await?;
        self.commit(session)
    }

    pub async fn signup(self, email: String, password: String, name: String) -> ClientResult<()> {
        let auth = self.services.auth();
        let session = auth.signup(&email, &password, &name).await?;
        self.commit(session)
    }

    pub async fn reset_password(self, email: String) -> ClientResult<()> {
        self.services.auth().reset_password(&email).await
    }

    /// 注销：清除会话记录与两个作用域里的 token
    ///
    /// 导航由路由服务的认证状态监听自动处理。
    pub fn logout(&self) {
        self.store.update(|s| s.logout(&WebSessionStorage));
        tracing::info!("signed out");
    }

    pub fn update_profile(&self, name: &str, avatar: Option<String>) -> ClientResult<()> {
        let mut result = Ok(());
        self.store.update(|s| {
            result = s.update_profile(name, avatar).map(|_| ());
        });
        result
    }

    fn commit(&self, session: Session) -> ClientResult<()> {
        let mut result = Ok(());
        self.store.update(|s| {
            result = s.establish(session).map(|_| ());
        });
        result
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
