//! 已配置的远端客户端

use std::sync::Arc;

use retention_adapter_http::{HttpApiConfig, TfeHttpClient};
use retention_config::ProviderConfig;
use retention_errors::AppResult;
use retention_ports::RetentionPolicyApi;

/// Provider 配置完成后注入到资源中的客户端句柄
#[derive(Clone)]
pub struct ConfiguredClient {
    pub client: Arc<dyn RetentionPolicyApi>,
    /// Provider 级默认组织
    pub organization: Option<String>,
}

impl ConfiguredClient {
    pub fn new(client: Arc<dyn RetentionPolicyApi>, organization: Option<String>) -> Self {
        let organization = organization
            .map(|org| org.trim().to_string())
            .filter(|org| !org.is_empty());
        Self {
            client,
            organization,
        }
    }

    /// 根据 provider 配置构建 HTTP 客户端
    pub fn from_config(config: &ProviderConfig) -> AppResult<Self> {
        let client = TfeHttpClient::new(HttpApiConfig::from(config))?;
        Ok(Self::new(
            Arc::new(client),
            config.default_organization().map(str::to_string),
        ))
    }

    pub fn default_organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }
}

impl std::fmt::Debug for ConfiguredClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredClient")
            .field("organization", &self.organization)
            .finish_non_exhaustive()
    }
}
