//! retention-config - Provider 配置加载库
//!
//! 配置来源（后者覆盖前者）：默认值 → TOML 文件 → `TFE_` 前缀环境变量。
//! 嵌套字段使用双下划线，例如 `TFE_TELEMETRY__LOG_LEVEL`。

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "TFE_";

/// 默认远端主机
pub const DEFAULT_HOSTNAME: &str = "app.terraform.io";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// 遥测配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 输出 JSON 格式日志
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

/// Provider 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_hostname")]
    pub hostname: String,
    pub token: Secret<String>,
    /// Provider 级默认组织，资源未声明组织时使用
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub ssl_skip_verify: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

fn default_hostname() -> String {
    DEFAULT_HOSTNAME.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// 仅用于给 figment 提供默认值（不含 token）
#[derive(Serialize)]
struct Defaults {
    hostname: String,
    ssl_skip_verify: bool,
    request_timeout_secs: u64,
    telemetry: TelemetryConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            ssl_skip_verify: false,
            request_timeout_secs: default_request_timeout_secs(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl ProviderConfig {
    /// 构建配置来源
    pub fn figment(config_file: Option<&str>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Defaults::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// 从配置文件和环境变量加载配置
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment(config_file))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hostname.trim().is_empty() {
            return Err(ConfigError::Invalid("hostname must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// 去除空白后的默认组织；空字符串视为未设置
    pub fn default_organization(&self) -> Option<&str> {
        self.organization
            .as_deref()
            .map(str::trim)
            .filter(|org| !org.is_empty())
    }

    /// API 根地址，例如 `https://app.terraform.io/api/v2/`
    ///
    /// hostname 可以显式带上 `http://` 或 `https://`。
    pub fn base_url(&self) -> String {
        let host = self.hostname.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            format!("{}/api/v2/", host)
        } else {
            format!("https://{}/api/v2/", host)
        }
    }
}
