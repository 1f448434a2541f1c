//! Provider 运行时

use retention_config::ProviderConfig;
use retention_errors::{AppError, AppResult};
use retention_telemetry::init_from_config;
use tracing::info;

use crate::ConfiguredClient;

/// 运行时配置
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// 可选的 TOML 配置文件路径
    pub config_file: Option<String>,
    /// 是否读取当前目录的 `.env`
    pub load_dotenv: bool,
}

/// 加载 provider 配置
pub fn load_config(runtime: &RuntimeConfig) -> AppResult<ProviderConfig> {
    if runtime.load_dotenv {
        // .env 不存在时忽略
        let _ = dotenvy::dotenv();
    }

    ProviderConfig::load(runtime.config_file.as_deref())
        .map_err(|e| AppError::provider(e.to_string()))
}

/// 初始化遥测
pub fn init_runtime(config: &ProviderConfig) {
    init_from_config(&config.telemetry);

    info!(
        hostname = %config.hostname,
        organization = config.default_organization().unwrap_or("-"),
        "Provider runtime initialized"
    );
}

/// 加载配置、初始化遥测并构建客户端
pub fn configure(runtime: &RuntimeConfig) -> AppResult<ConfiguredClient> {
    let config = load_config(runtime)?;
    init_runtime(&config);
    ConfiguredClient::from_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_configure_from_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("TFE_TOKEN", "abc");
            jail.set_env("TFE_HOSTNAME", "tfe.example.com");
            jail.set_env("TFE_ORGANIZATION", "acme");

            let client = configure(&RuntimeConfig::default()).expect("client configured");
            assert_eq!(client.default_organization(), Some("acme"));
            Ok(())
        });
    }

    #[test]
    fn test_config_file_is_read() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("provider.toml", r#"token = "from-file""#)?;

            let runtime = RuntimeConfig {
                config_file: Some("provider.toml".to_string()),
                load_dotenv: false,
            };
            let config = load_config(&runtime).expect("config loads");
            assert_eq!(config.default_organization(), None);
            Ok(())
        });
    }

    #[test]
    fn test_load_failure_is_provider_error() {
        Jail::expect_with(|jail| {
            jail.clear_env();

            let err = load_config(&RuntimeConfig::default()).unwrap_err();
            assert!(matches!(err, AppError::Provider(_)));
            Ok(())
        });
    }
}
