//! In-memory store implementation

use std::collections::HashMap;

use async_trait::async_trait;
use retention_common::{PolicyId, PolicyScope, new_policy_id};
use retention_errors::{AppError, AppResult};
use retention_ports::{
    DeleteOlderSetOptions, PolicyChoice, RemoteDeleteOlder, RemoteDontDelete, RetentionPolicyApi,
};
use tokio::sync::RwLock;
use tracing::debug;

/// Number of calls received per remote operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub set_delete_older: usize,
    pub set_dont_delete: usize,
    pub read_policy_choice: usize,
}

impl CallCounts {
    /// Total number of "set" calls
    pub fn sets(&self) -> usize {
        self.set_delete_older + self.set_dont_delete
    }
}

#[derive(Default)]
struct State {
    policies: HashMap<PolicyScope, PolicyChoice>,
    calls: CallCounts,
    failure: Option<String>,
}

/// Remote API fake backed by a map keyed on scope
#[derive(Default)]
pub struct InMemoryRetentionApi {
    state: RwLock<State>,
}

impl InMemoryRetentionApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a policy as if it had been set out of band
    pub async fn insert(&self, scope: PolicyScope, choice: PolicyChoice) {
        let mut state = self.state.write().await;
        if matches!(choice, PolicyChoice::None) {
            state.policies.remove(&scope);
        } else {
            state.policies.insert(scope, choice);
        }
    }

    /// Drop the policy of a scope, like deleting it remotely
    pub async fn remove(&self, scope: &PolicyScope) {
        self.state.write().await.policies.remove(scope);
    }

    /// Make every following call fail with an external service error
    pub async fn fail_with(&self, message: impl Into<String>) {
        self.state.write().await.failure = Some(message.into());
    }

    pub async fn clear_failure(&self) {
        self.state.write().await.failure = None;
    }

    pub async fn calls(&self) -> CallCounts {
        self.state.read().await.calls
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.policies.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_failure(state: &State) -> AppResult<()> {
        match &state.failure {
            Some(message) => Err(AppError::external_service(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RetentionPolicyApi for InMemoryRetentionApi {
    async fn set_delete_older(
        &self,
        scope: &PolicyScope,
        options: DeleteOlderSetOptions,
    ) -> AppResult<RemoteDeleteOlder> {
        let mut state = self.state.write().await;
        state.calls.set_delete_older += 1;
        Self::check_failure(&state)?;

        let policy = RemoteDeleteOlder {
            id: PolicyId::new(new_policy_id()),
            delete_older_than_n_days: options.delete_older_than_n_days,
        };
        debug!(%scope, id = %policy.id, "Stored delete-older policy");
        state
            .policies
            .insert(scope.clone(), PolicyChoice::DeleteOlder(policy.clone()));

        Ok(policy)
    }

    async fn set_dont_delete(&self, scope: &PolicyScope) -> AppResult<RemoteDontDelete> {
        let mut state = self.state.write().await;
        state.calls.set_dont_delete += 1;
        Self::check_failure(&state)?;

        let policy = RemoteDontDelete {
            id: PolicyId::new(new_policy_id()),
        };
        debug!(%scope, id = %policy.id, "Stored dont-delete policy");
        state
            .policies
            .insert(scope.clone(), PolicyChoice::DontDelete(policy.clone()));

        Ok(policy)
    }

    async fn read_policy_choice(&self, scope: &PolicyScope) -> AppResult<PolicyChoice> {
        let mut state = self.state.write().await;
        state.calls.read_policy_choice += 1;
        Self::check_failure(&state)?;

        Ok(state
            .policies
            .get(scope)
            .cloned()
            .unwrap_or(PolicyChoice::None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_read_echoes() {
        let api = InMemoryRetentionApi::new();
        let scope = PolicyScope::organization("acme");

        let set = api
            .set_delete_older(&scope, DeleteOlderSetOptions { delete_older_than_n_days: 30 })
            .await
            .unwrap();

        let read = api.read_policy_choice(&scope).await.unwrap();
        assert_eq!(read, PolicyChoice::DeleteOlder(set));
        assert_eq!(api.calls().await.sets(), 1);
    }

    #[tokio::test]
    async fn test_scopes_are_independent() {
        let api = InMemoryRetentionApi::new();
        let org = PolicyScope::organization("acme");
        let ws = PolicyScope::workspace("ws-1");

        api.set_dont_delete(&ws).await.unwrap();

        assert_eq!(api.read_policy_choice(&org).await.unwrap(), PolicyChoice::None);
        assert!(matches!(
            api.read_policy_choice(&ws).await.unwrap(),
            PolicyChoice::DontDelete(_)
        ));
    }

    #[tokio::test]
    async fn test_set_replaces_previous_policy() {
        let api = InMemoryRetentionApi::new();
        let scope = PolicyScope::workspace("ws-1");

        let first = api.set_dont_delete(&scope).await.unwrap();
        let second = api
            .set_delete_older(&scope, DeleteOlderSetOptions { delete_older_than_n_days: 5 })
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(api.len().await, 1);
        assert_eq!(
            api.read_policy_choice(&scope).await.unwrap().policy_id(),
            Some(&second.id)
        );
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let api = InMemoryRetentionApi::new();
        let scope = PolicyScope::organization("acme");
        api.fail_with("503 service unavailable").await;

        let err = api.set_dont_delete(&scope).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));
        assert!(api.is_empty().await);

        api.clear_failure().await;
        assert!(api.set_dont_delete(&scope).await.is_ok());
    }
}
