//! HTTP client configuration

use retention_config::ProviderConfig;
use secrecy::Secret;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// API root, e.g. `https://app.terraform.io/api/v2/`
    pub base_url: String,

    /// Bearer token
    pub token: Secret<String>,

    /// Accept invalid TLS certificates
    pub ssl_skip_verify: bool,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl From<&ProviderConfig> for HttpApiConfig {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            base_url: config.base_url(),
            token: config.token.clone(),
            ssl_skip_verify: config.ssl_skip_verify,
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

/// Builder for HttpApiConfig
pub struct HttpApiConfigBuilder {
    config: HttpApiConfig,
}

impl HttpApiConfigBuilder {
    /// Create a new builder with the API root
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            config: HttpApiConfig {
                base_url: base_url.into(),
                token: Secret::new(String::new()),
                ssl_skip_verify: false,
                request_timeout_secs: default_request_timeout(),
            },
        }
    }

    /// Set bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Secret::new(token.into());
        self
    }

    /// Skip TLS verification
    pub fn with_ssl_skip_verify(mut self, skip: bool) -> Self {
        self.config.ssl_skip_verify = skip;
        self
    }

    /// Set request timeout
    pub fn with_request_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.request_timeout_secs = timeout_secs;
        self
    }

    /// Build the configuration
    pub fn build(self) -> HttpApiConfig {
        self.config
    }
}
