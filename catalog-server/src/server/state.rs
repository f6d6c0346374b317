use std::sync::Arc;

use crate::server::{AccessPolicy, Config};
use crate::store::{DocumentStore, GitHubStore};

/// Shared application state handed to every handler.
///
/// Nothing in here is mutable: requests are independent, and cross-request
/// coordination is delegated entirely to the remote store's version token.
#[derive(Clone)]
pub struct ServerState {
    config: Arc<Config>,
    policy: Arc<AccessPolicy>,
    store: Arc<dyn DocumentStore>,
}

impl ServerState {
    /// Build state with the production GitHub-backed store.
    pub fn initialize(config: &Config) -> Self {
        let store = Arc::new(GitHubStore::new(&config.github));
        Self::with_store(config.clone(), store)
    }

    /// Build state around a custom store (tests substitute a double here).
    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        let policy = AccessPolicy::new(
            config.allowed_origins.clone(),
            config.admin_password.clone(),
        );

        Self {
            config: Arc::new(config),
            policy: Arc::new(policy),
            store,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
