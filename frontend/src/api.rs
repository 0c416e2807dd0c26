//! 后端服务装配
//!
//! 配置在构建时通过环境变量确定（`option_env!`），启动时解析一次，之后只读。

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use leptos::prelude::*;
use nationpost::config::{ENV_API_URL, ENV_GATEWAY_URL, ENV_SIMULATED_LATENCY_MS};
use nationpost::error::ClientResult;
use nationpost::session::{AuthService, RemoteAuth, SimulatedAuth};
use nationpost::{ClientConfig, NationPostApi, Session};

use crate::web::{FetchClient, WebLocalStorage};

pub type Api = NationPostApi<FetchClient>;

/// `remote` 时走后端登录，否则使用本地模拟认证
const ENV_AUTH_MODE: &str = "NATIONPOST_AUTH_MODE";

fn build_env(key: &str) -> Option<String> {
    // option_env! 只接受字面量
    let value = match key {
        ENV_API_URL => option_env!("NATIONPOST_API_URL"),
        ENV_GATEWAY_URL => option_env!("NATIONPOST_GATEWAY_URL"),
        ENV_SIMULATED_LATENCY_MS => option_env!("NATIONPOST_SIMULATED_LATENCY_MS"),
        ENV_AUTH_MODE => option_env!("NATIONPOST_AUTH_MODE"),
        _ => None,
    };
    value.map(str::to_string)
}

/// 模拟认证前等待配置的延迟，模拟网络往返
struct DelayedAuth<A> {
    inner: A,
    latency: Duration,
}

impl<A> DelayedAuth<A> {
    async fn wait(&self) {
        simulated_delay(self.latency).await;
    }
}

#[async_trait(?Send)]
impl<A: AuthService> AuthService for DelayedAuth<A> {
    async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        self.wait().await;
        self.inner.login(email, password).await
    }

    async fn signup(&self, email: &str, password: &str, name: &str) -> ClientResult<Session> {
        self.wait().await;
        self.inner.signup(email, password, name).await
    }

    async fn reset_password(&self, email: &str) -> ClientResult<()> {
        self.wait().await;
        self.inner.reset_password(email).await
    }
}

/// 应用级服务句柄
#[derive(Clone, Copy)]
pub struct Services {
    api: StoredValue<Rc<Api>, LocalStorage>,
    auth: StoredValue<Rc<dyn AuthService>, LocalStorage>,
}

impl Services {
    pub fn from_build_env() -> Self {
        let config = ClientConfig::from_lookup(build_env);
        tracing::info!(api = %config.api_base_url, "client configured");

        let latency = config.simulated_latency;
        let api = Rc::new(NationPostApi::new(config, FetchClient));

        let auth: Rc<dyn AuthService> = match build_env(ENV_AUTH_MODE).as_deref() {
            Some("remote") => Rc::new(RemoteAuth::new(api.clone(), WebLocalStorage)),
            _ => Rc::new(DelayedAuth {
                inner: SimulatedAuth,
                latency,
            }),
        };

        Self {
            api: StoredValue::new_local(api),
            auth: StoredValue::new_local(auth),
        }
    }

    pub fn api(&self) -> Rc<Api> {
        self.api.get_value()
    }

    pub fn auth(&self) -> Rc<dyn AuthService> {
        self.auth.get_value()
    }

    pub fn simulated_latency(&self) -> Duration {
        self.api.with_value(|api| api.config().simulated_latency)
    }
}

pub fn use_services() -> Services {
    use_context::<Services>().expect("Services should be provided")
}

/// 等待配置的模拟延迟
pub async fn simulated_delay(latency: Duration) {
    let millis = u32::try_from(latency.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}
