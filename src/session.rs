//! 会话模块
//!
//! `SessionStore` 持有当前登录身份并负责持久化；
//! 具体的登录 / 注册 / 重置密码由注入的 `AuthService` 完成（本地模拟或远程后端）。

use std::rc::Rc;

use nationpost_shared::chrono::NaiveDate;
use nationpost_shared::protocol::{LoginRequest, ResetPasswordRequest, SignupRequest};
use nationpost_shared::{Role, STORAGE_SESSION_KEY, STORAGE_TOKEN_KEY, Session, date};

use crate::api::NationPostApi;
use crate::error::{ClientError, ClientErrorKind, ClientResult};
use crate::request::HttpClient;
use crate::storage::KeyValueStore;
use crate::token::decode_claims_lossy;

#[cfg(test)]
mod tests;

pub const MIN_PASSWORD_LEN: usize = 6;

const DEMO_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face";

// =========================================================
// 认证服务抽象
// =========================================================

#[async_trait::async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, email: &str, password: &str) -> ClientResult<Session>;
    async fn signup(&self, email: &str, password: &str, name: &str) -> ClientResult<Session>;
    async fn reset_password(&self, email: &str) -> ClientResult<()>;
}

/// 由邮箱本地部分生成显示名：`.` 与 `_` 换成空格，每个单词首字母大写
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut name = String::with_capacity(local.len());
    let mut at_word_start = true;
    for c in local.chars() {
        let c = if c == '.' || c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if at_word_start {
                name.extend(c.to_uppercase());
            } else {
                name.push(c);
            }
            at_word_start = false;
        } else {
            name.push(c);
            at_word_start = true;
        }
    }
    name
}

fn check_credentials(email: &str, password: &str) -> ClientResult<()> {
    if email.trim().is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ClientError::invalid_credentials("Invalid credentials"));
    }
    Ok(())
}

fn check_registration(email: &str, password: &str, name: &str) -> ClientResult<()> {
    if name.trim().is_empty()
        || email.trim().is_empty()
        || password.chars().count() < MIN_PASSWORD_LEN
    {
        return Err(ClientError::invalid_registration("Invalid registration data"));
    }
    Ok(())
}

fn new_member(email: &str, name: &str) -> Session {
    Session {
        id: uuid::Uuid::new_v4().to_string(),
        email: email.trim().to_string(),
        name: name.trim().to_string(),
        avatar: None,
        role: Role::User,
        join_date: date::today(),
        verified: false,
    }
}

// =========================================================
// 实现层: 本地模拟
// =========================================================

/// 纯本地的模拟认证，不发出任何网络请求
#[derive(Debug, Clone, Default)]
pub struct SimulatedAuth;

#[async_trait::async_trait(?Send)]
impl AuthService for SimulatedAuth {
    async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        check_credentials(email, password).map_err(|e| e.in_op("auth.simulated.login"))?;

        Ok(Session {
            id: "1".to_string(),
            email: email.trim().to_string(),
            name: display_name_from_email(email.trim()),
            avatar: Some(DEMO_AVATAR.to_string()),
            role: Role::User,
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_else(date::today),
            verified: true,
        })
    }

    async fn signup(&self, email: &str, password: &str, name: &str) -> ClientResult<Session> {
        check_registration(email, password, name).map_err(|e| e.in_op("auth.simulated.signup"))?;
        Ok(new_member(email, name))
    }

    async fn reset_password(&self, email: &str) -> ClientResult<()> {
        tracing::info!(email, "password reset email sent (simulated)");
        Ok(())
    }
}

// =========================================================
// 实现层: 远程后端
// =========================================================

/// 通过后端完成认证；登录成功后把 bearer token 写入 `token_store`
pub struct RemoteAuth<C: HttpClient, T: KeyValueStore> {
    api: Rc<NationPostApi<C>>,
    token_store: T,
}

impl<C: HttpClient, T: KeyValueStore> RemoteAuth<C, T> {
    pub fn new(api: Rc<NationPostApi<C>>, token_store: T) -> Self {
        Self { api, token_store }
    }
}

#[async_trait::async_trait(?Send)]
impl<C: HttpClient, T: KeyValueStore> AuthService for RemoteAuth<C, T> {
    async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        check_credentials(email, password).map_err(|e| e.in_op("auth.remote.login"))?;

        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let resp = self.api.call(&req).await.map_err(|e| {
            let e = match e.kind {
                ClientErrorKind::Backend { status: 401 } => {
                    ClientError::invalid_credentials("Invalid credentials")
                }
                _ => e,
            };
            e.in_op("auth.remote.login")
        })?;

        let claims = match resp.token.as_deref() {
            Some(token) if !token.is_empty() => {
                if !self.token_store.set(STORAGE_TOKEN_KEY, token) {
                    tracing::warn!("failed to persist bearer token");
                }
                decode_claims_lossy(token)
            }
            _ => Default::default(),
        };

        let name = resp
            .name
            .filter(|n| !n.trim().is_empty())
            .or(claims.name)
            .unwrap_or_else(|| display_name_from_email(email.trim()));

        Ok(Session {
            id: claims
                .user_id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            email: email.trim().to_string(),
            name,
            avatar: None,
            role: Role::User,
            join_date: date::today(),
            verified: true,
        })
    }

    async fn signup(&self, email: &str, password: &str, name: &str) -> ClientResult<Session> {
        check_registration(email, password, name).map_err(|e| e.in_op("auth.remote.signup"))?;

        let req = SignupRequest {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        };
        self.api.call(&req).await.map_err(|e| {
            let e = match e.kind {
                ClientErrorKind::Backend { status: 409 } => ClientError::conflict(
                    "An account with this email already exists. Please try signing in instead.",
                ),
                ClientErrorKind::Backend { status: 400 } => ClientError::validation(
                    if e.message.starts_with("Request failed") {
                        "Please check your input and try again.".to_string()
                    } else {
                        e.message.clone()
                    },
                ),
                _ => e,
            };
            e.in_op("auth.remote.signup")
        })?;

        Ok(new_member(&req.email, &req.name))
    }

    async fn reset_password(&self, email: &str) -> ClientResult<()> {
        let req = ResetPasswordRequest {
            email: email.trim().to_string(),
        };
        self.api
            .call(&req)
            .await
            .map(|_| ())
            .map_err(|e| e.in_op("auth.remote.reset_password"))
    }
}

// =========================================================
// 会话存储
// =========================================================

/// 会话存储
///
/// 内存中的身份与持久化记录保持一致：每次变更都同步写入 / 擦除存储。
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    session: Option<Session>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// 启动时恢复会话
    ///
    /// 记录损坏时视为未登录，并删除坏记录。
    pub fn load(storage: S) -> Self {
        let session = match storage.get(STORAGE_SESSION_KEY) {
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable session record");
                    storage.remove(STORAGE_SESSION_KEY);
                    None
                }
            },
            None => None,
        };
        Self { storage, session }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 提交一个已认证的身份并持久化
    pub fn establish(&mut self, session: Session) -> ClientResult<&Session> {
        let raw = serde_json::to_string(&session)?;
        if !self.storage.set(STORAGE_SESSION_KEY, &raw) {
            tracing::warn!("session record could not be persisted");
        }
        let session = self.session.insert(session);
        Ok(&*session)
    }

    pub async fn login<A: AuthService + ?Sized>(
        &mut self,
        auth: &A,
        email: &str,
        password: &str,
    ) -> ClientResult<&Session> {
        let session = auth.login(email, password).await?;
        tracing::info!(email = %session.email, "signed in");
        self.establish(session)
    }

    pub async fn signup<A: AuthService + ?Sized>(
        &mut self,
        auth: &A,
        email: &str,
        password: &str,
        name: &str,
    ) -> ClientResult<&Session> {
        let session = auth.signup(email, password, name).await?;
        tracing::info!(email = %session.email, "account created");
        self.establish(session)
    }

    pub async fn reset_password<A: AuthService + ?Sized>(
        &self,
        auth: &A,
        email: &str,
    ) -> ClientResult<()> {
        auth.reset_password(email).await
    }

    /// 注销，幂等
    ///
    /// token 可能落在任一作用域（见 `find_bearer_token`），两处都要擦除。
    pub fn logout<T: KeyValueStore + ?Sized>(&mut self, secondary: &T) {
        self.session = None;
        self.storage.remove(STORAGE_SESSION_KEY);
        self.storage.remove(STORAGE_TOKEN_KEY);
        secondary.remove(STORAGE_TOKEN_KEY);
    }

    /// 资料页修改显示名与头像
    pub fn update_profile(&mut self, name: &str, avatar: Option<String>) -> ClientResult<&Session> {
        let current = self
            .session
            .clone()
            .ok_or_else(|| ClientError::invalid_credentials("Not signed in").in_op("session.update_profile"))?;
        if name.trim().is_empty() {
            return Err(ClientError::validation("Name is required").in_op("session.update_profile"));
        }
        self.establish(Session {
            name: name.trim().to_string(),
            avatar: avatar.filter(|a| !a.trim().is_empty()),
            ..current
        })
    }
}
