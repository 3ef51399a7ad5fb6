//! 国家数据拉取
//!
//! 对固定的 REST 端点发起一次 GET，返回原始 JSON 对象列表。
//! 任何失败（网络错误、非 2xx 状态、无法解析的响应体）都降级为空列表，
//! 不向调用方抛出错误。

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace, warn};
use ureq::Agent;

use crate::config::UpstreamConfig;

/// 国家数据来源
///
/// 返回 `(原始国家对象, ok)`；`ok == false` 时列表一定为空。
#[async_trait]
pub trait CountryFetcher: Send + Sync {
    async fn fetch_all(&self) -> (Vec<Value>, bool);

    fn name(&self) -> &'static str;
}

/// restcountries.com 风格的 HTTP 数据源
pub struct RestCountriesFetcher {
    url: String,
    agent: Agent,
}

impl RestCountriesFetcher {
    /// `timeout` 为 `None` 时沿用 ureq 默认值
    pub fn new(url: &str, timeout: Option<Duration>) -> Self {
        // 非 2xx 由 fetch_sync 自己判断
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .into();

        Self {
            url: url.to_string(),
            agent,
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(
            &config.countries_url,
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 同步请求（在 spawn_blocking 中调用）
    fn fetch_sync(agent: Agent, url: String) -> (Vec<Value>, bool) {
        let resp = match agent.get(&url).call() {
            Ok(r) => r,
            Err(e) => {
                warn!("Country API request to \"{}\" failed: {}", url, e);
                return (Vec::new(), false);
            }
        };

        let status = resp.status();
        if !status.is_success() {
            warn!("Country API \"{}\" returned status {}", url, status);
            return (Vec::new(), false);
        }

        let json: Value = match resp.into_body().read_json() {
            Ok(j) => j,
            Err(e) => {
                warn!("Country API response from \"{}\" parse failed: {}", url, e);
                return (Vec::new(), false);
            }
        };

        decode_countries(json)
    }
}

/// 把响应体拆成国家对象列表
///
/// 非数组（包括 `null`）视为失败；空数组是成功但没有数据。
pub fn decode_countries(json: Value) -> (Vec<Value>, bool) {
    match json {
        Value::Array(items) => {
            trace!("Country API returned {} records", items.len());
            (items, true)
        }
        other => {
            warn!(
                "Country API returned a non-array payload ({}), treating as no data",
                json_kind(&other)
            );
            (Vec::new(), false)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl CountryFetcher for RestCountriesFetcher {
    async fn fetch_all(&self) -> (Vec<Value>, bool) {
        let agent = self.agent.clone();
        let url = self.url.clone();
        debug!("Fetching countries from {}", url);

        tokio::task::spawn_blocking(move || Self::fetch_sync(agent, url))
            .await
            .unwrap_or_else(|e| {
                warn!("Country fetch spawn_blocking failed: {}", e);
                (Vec::new(), false)
            })
    }

    fn name(&self) -> &'static str {
        "RestCountries"
    }
}
