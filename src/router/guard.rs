//! Pre-navigation guard.
//!
//! DESIGN
//! ======
//! The decision is a pure function of the matched route's `requires_auth`
//! flag and whether the credential store holds a token:
//!
//! | requires_auth | credential | outcome                  |
//! |---------------|------------|--------------------------|
//! | false         | any        | proceed to target        |
//! | true          | present    | proceed to target        |
//! | true          | absent     | redirect to login path   |
//!
//! A redirect discards the original target. Unmatched targets are treated as
//! public and left to the shell's not-found view.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::config::RouterConfig;
use super::credential::CredentialProvider;
use super::error::RouteError;
use super::table::{RouteEntry, RouteTable};

/// One navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target_path: String,
    pub source_path: String,
}

impl NavigationRequest {
    pub fn new(target_path: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self { target_path: target_path.into(), source_path: source_path.into() }
    }
}

/// Result of running the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Proceed { path: String },
    Redirect { to: String },
}

impl NavigationOutcome {
    /// Path the browser ends up on.
    pub fn destination(&self) -> &str {
        match self {
            Self::Proceed { path } => path,
            Self::Redirect { to } => to,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Proceed { .. })
    }
}

/// Guard decision for a single request.
pub fn decide(requires_auth: bool, credential_present: bool, target_path: &str, login_path: &str) -> NavigationOutcome {
    if requires_auth && !credential_present {
        NavigationOutcome::Redirect { to: login_path.to_owned() }
    } else {
        NavigationOutcome::Proceed { path: target_path.to_owned() }
    }
}

/// Route table plus the injected credential store.
#[derive(Debug)]
pub struct RouterHandle<P> {
    table: RouteTable,
    credentials: P,
    config: RouterConfig,
}

impl<P: CredentialProvider> RouterHandle<P> {
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the login route itself
    /// requires authentication.
    pub fn new(table: RouteTable, credentials: P, config: RouterConfig) -> Result<Self, RouteError> {
        config.validate()?;
        if let Some(login) = table.lookup(&config.login_path) {
            if login.requires_auth {
                return Err(RouteError::GuardedLoginRoute(login.path.clone()));
            }
        }
        Ok(Self { table, credentials, config })
    }

    /// Register `entries` and wrap them in a handle.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed paths or an invalid guard setup.
    pub fn register(
        entries: impl IntoIterator<Item = RouteEntry>,
        credentials: P,
        config: RouterConfig,
    ) -> Result<Self, RouteError> {
        Self::new(RouteTable::register(entries)?, credentials, config)
    }

    /// Run the guard for `request`. The credential store is read only when
    /// the matched route requires authentication.
    pub fn navigate(&self, request: &NavigationRequest) -> NavigationOutcome {
        let target = request.target_path.as_str();
        let requires_auth = self.table.lookup(target).is_some_and(|entry| entry.requires_auth);
        let credential_present = requires_auth && self.credentials.has_credential(&self.config.token_key);

        let outcome = decide(requires_auth, credential_present, target, &self.config.login_path);
        match &outcome {
            NavigationOutcome::Proceed { .. } => {
                log::debug!("guard: {} -> {} allowed", request.source_path, target);
            }
            NavigationOutcome::Redirect { to } => {
                log::info!("guard: {} -> {} blocked, redirecting to {}", request.source_path, target, to);
            }
        }
        outcome
    }

    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.table.lookup(path)
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}
