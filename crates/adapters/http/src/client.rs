//! HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use retention_common::PolicyScope;
use retention_errors::{AppError, AppResult};
use retention_ports::{
    DeleteOlderSetOptions, PolicyChoice, RemoteDeleteOlder, RemoteDontDelete, RetentionPolicyApi,
};
use secrecy::{ExposeSecret, Secret};
use tracing::{debug, info};
use url::Url;

use crate::config::HttpApiConfig;
use crate::error::{map_http_error, map_transport_error};
use crate::jsonapi::{self, MEDIA_TYPE, SetRequest};

const RELATIONSHIP: &str = "data-retention-policy";

/// Remote retention policy API client
pub struct TfeHttpClient {
    http: Client,
    base_url: Url,
    token: Secret<String>,
}

impl TfeHttpClient {
    /// Create a new client
    pub fn new(config: HttpApiConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::provider(format!("Invalid API base URL {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::provider(format!(
                "API base URL cannot be a base: {}",
                config.base_url
            )));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .danger_accept_invalid_certs(config.ssl_skip_verify)
            .build()
            .map_err(|e| AppError::provider(format!("Failed to build HTTP client: {}", e)))?;

        info!(base_url = %base_url, "Configured remote retention policy API");

        Ok(Self {
            http,
            base_url,
            token: config.token,
        })
    }

    /// `<base>/{organizations/<org>|workspaces/<ws>}/relationships/data-retention-policy[/actions/<action>]`
    pub fn policy_url(&self, scope: &PolicyScope, action: Option<&str>) -> AppResult<Url> {
        let collection = match scope {
            PolicyScope::Organization(_) => "organizations",
            PolicyScope::Workspace(_) => "workspaces",
        };

        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| AppError::internal("API base URL cannot be a base"))?;
            segments
                .pop_if_empty()
                .extend([collection, scope.address(), "relationships", RELATIONSHIP]);
            if let Some(action) = action {
                segments.extend(["actions", action]);
            }
        }
        Ok(url)
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(self.token.expose_secret())
            .header(ACCEPT, MEDIA_TYPE)
            .header(CONTENT_TYPE, MEDIA_TYPE)
    }

    /// Send the request and return the body of a successful response
    async fn send(&self, builder: RequestBuilder, context: &str) -> AppResult<String> {
        let response = self
            .request(builder)
            .send()
            .await
            .map_err(|e| map_transport_error(e, context))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, context))?;

        if !status.is_success() {
            return Err(map_http_error(status, &body, context));
        }

        Ok(body)
    }

    async fn post(&self, url: Url, body: &SetRequest, context: &str) -> AppResult<String> {
        let payload = serde_json::to_vec(body)
            .map_err(|e| AppError::internal(format!("Failed to encode request: {}", e)))?;
        self.send(self.http.post(url).body(payload), context).await
    }
}

#[async_trait]
impl RetentionPolicyApi for TfeHttpClient {
    async fn set_delete_older(
        &self,
        scope: &PolicyScope,
        options: DeleteOlderSetOptions,
    ) -> AppResult<RemoteDeleteOlder> {
        let url = self.policy_url(scope, Some("delete-older"))?;
        debug!(%scope, days = options.delete_older_than_n_days, "POST {}", url);

        let context = format!("Failed to set delete-older policy for {}", scope);
        let body = self
            .post(
                url,
                &SetRequest::delete_older(options.delete_older_than_n_days),
                &context,
            )
            .await?;
        jsonapi::decode_delete_older(&body)
    }

    async fn set_dont_delete(&self, scope: &PolicyScope) -> AppResult<RemoteDontDelete> {
        let url = self.policy_url(scope, Some("dont-delete"))?;
        debug!(%scope, "POST {}", url);

        let context = format!("Failed to set dont-delete policy for {}", scope);
        let body = self.post(url, &SetRequest::dont_delete(), &context).await?;
        jsonapi::decode_dont_delete(&body)
    }

    async fn read_policy_choice(&self, scope: &PolicyScope) -> AppResult<PolicyChoice> {
        let url = self.policy_url(scope, None)?;
        debug!(%scope, "GET {}", url);

        let context = format!("Failed to read data retention policy for {}", scope);
        let body = self.send(self.http.get(url), &context).await?;
        jsonapi::decode_choice(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpApiConfigBuilder;

    fn client(base: &str) -> TfeHttpClient {
        TfeHttpClient::new(HttpApiConfigBuilder::new(base).with_token("t").build()).unwrap()
    }

    #[test]
    fn test_organization_urls() {
        let client = client("https://app.terraform.io/api/v2/");
        let scope = PolicyScope::organization("acme");

        assert_eq!(
            client.policy_url(&scope, None).unwrap().as_str(),
            "https://app.terraform.io/api/v2/organizations/acme/relationships/data-retention-policy"
        );
        assert_eq!(
            client.policy_url(&scope, Some("delete-older")).unwrap().as_str(),
            "https://app.terraform.io/api/v2/organizations/acme/relationships/data-retention-policy/actions/delete-older"
        );
    }

    #[test]
    fn test_workspace_urls_escape_address() {
        let client = client("http://localhost:8080/api/v2");
        let scope = PolicyScope::workspace("ws 1/x");

        assert_eq!(
            client.policy_url(&scope, Some("dont-delete")).unwrap().as_str(),
            "http://localhost:8080/api/v2/workspaces/ws%201%2Fx/relationships/data-retention-policy/actions/dont-delete"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = TfeHttpClient::new(HttpApiConfigBuilder::new("not a url").build());
        assert!(matches!(result, Err(AppError::Provider(_))));

        let result = TfeHttpClient::new(HttpApiConfigBuilder::new("mailto:ops@example.com").build());
        assert!(matches!(result, Err(AppError::Provider(_))));
    }
}
