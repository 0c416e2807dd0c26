use std::time::Duration;

// =========================================================
// 运行时配置 (Runtime Configuration)
// =========================================================

/// 以下是默认值，如果环境（或编译期变量）中没有定义，则使用这些值
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_GATEWAY_URL: &str = "https://emerald-general-ant-906.mypinata.cloud/ipfs/";
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1000;

pub const ENV_API_URL: &str = "NATIONPOST_API_URL";
pub const ENV_GATEWAY_URL: &str = "NATIONPOST_GATEWAY_URL";
pub const ENV_SIMULATED_LATENCY_MS: &str = "NATIONPOST_SIMULATED_LATENCY_MS";

/// 客户端配置
///
/// 在启动时解析一次，然后显式传入 API 网关和各个服务。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// 后端地址，不带末尾的 `/`
    pub api_base_url: String,
    /// 内容网关前缀，总是以 `/` 结尾
    pub ipfs_gateway_url: String,
    /// 本地模拟操作（模拟登录、区块校验）的延迟
    pub simulated_latency: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    pub fn new(api_base_url: &str, ipfs_gateway_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url),
            ipfs_gateway_url: normalize_gateway_url(ipfs_gateway_url),
            simulated_latency: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
        }
    }

    /// 从进程环境变量读取
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取，读不到或无效就用默认值
    ///
    /// 浏览器端没有进程环境，前端用 `option_env!` 的编译期值调用它。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url =
            non_empty(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let gateway_url =
            non_empty(ENV_GATEWAY_URL).unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());
        let latency_ms = non_empty(ENV_SIMULATED_LATENCY_MS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_SIMULATED_LATENCY_MS);

        Self {
            api_base_url: normalize_base_url(&api_base_url),
            ipfs_gateway_url: normalize_gateway_url(&gateway_url),
            simulated_latency: Duration::from_millis(latency_ms),
        }
    }

    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// 拼接完整 URL
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn normalize_gateway_url(url: &str) -> String {
    let url = url.trim();
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(
            config.ipfs_gateway_url,
            "https://emerald-general-ant-906.mypinata.cloud/ipfs/"
        );
        assert_eq!(config.simulated_latency, Duration::from_millis(1000));
    }

    #[test]
    fn lookup_values_are_normalized() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_URL, "https://api.example.org/"),
            (ENV_GATEWAY_URL, "https://gw.example.org/ipfs"),
            (ENV_SIMULATED_LATENCY_MS, "0"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.api_base_url, "https://api.example.org");
        assert_eq!(config.ipfs_gateway_url, "https://gw.example.org/ipfs/");
        assert_eq!(config.simulated_latency, Duration::ZERO);
    }

    #[test]
    fn invalid_latency_falls_back_to_default() {
        let config = ClientConfig::from_lookup(|k| {
            (k == ENV_SIMULATED_LATENCY_MS).then(|| "soon".to_string())
        });
        assert_eq!(config.simulated_latency, Duration::from_millis(1000));
    }

    #[test]
    fn url_joins_with_or_without_leading_slash() {
        let config = ClientConfig::new("http://host:5000/", "gw");
        assert_eq!(config.url("/verify"), "http://host:5000/verify");
        assert_eq!(config.url("verify"), "http://host:5000/verify");
    }
}
