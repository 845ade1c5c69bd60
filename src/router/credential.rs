//! Read-only access to the externally owned credential store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity flow writes and clears the token elsewhere. The guard only
//! asks whether a non-empty token exists under the configured key, so the
//! store is injected as a `CredentialProvider` instead of read from a global.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::collections::HashMap;

/// Key-value lookup of opaque credential tokens.
pub trait CredentialProvider: Send + Sync {
    /// Token stored under `key`, if any.
    fn credential(&self, key: &str) -> Option<String>;

    /// Whether a usable token is stored under `key`. Empty strings count as absent.
    fn has_credential(&self, key: &str) -> bool {
        self.credential(key).is_some_and(|token| !token.is_empty())
    }
}

impl<F> CredentialProvider for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn credential(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Browser `localStorage`. Yields nothing outside a `csr` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageCredentials;

impl CredentialProvider for LocalStorageCredentials {
    fn credential(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }
}

/// In-memory store for tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    values: HashMap<String, String>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding a single token under `key`.
    pub fn with(key: impl Into<String>, token: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.insert(key, token);
        store
    }

    pub fn insert(&mut self, key: impl Into<String>, token: impl Into<String>) {
        self.values.insert(key.into(), token.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

impl CredentialProvider for MemoryCredentials {
    fn credential(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
