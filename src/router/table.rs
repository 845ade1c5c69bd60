//! Static route table binding URL paths to views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is built once at startup and never mutated. Lookups use the
//! matching key from `path`, and duplicate registrations resolve first match
//! wins: later entries with the same key are dropped with a warning.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::HashMap;

use super::error::RouteError;
use super::path::{match_key, validate_pattern};

/// Opaque handle to a route-level view. The router never constructs views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Users,
    Items,
    Login,
    Register,
    Requests,
}

impl ViewId {
    /// Human-readable page title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Users => "Users",
            Self::Items => "Equipment",
            Self::Login => "Sign in",
            Self::Register => "Register",
            Self::Requests => "Borrow requests",
        }
    }
}

/// A single path-to-view binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub view: ViewId,
    pub requires_auth: bool,
}

impl RouteEntry {
    /// Public route bound to `view`.
    pub fn new(path: impl Into<String>, view: ViewId) -> Self {
        Self { path: path.into(), view, requires_auth: false }
    }

    /// Mark this route as requiring a stored credential.
    #[must_use]
    pub fn guarded(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

/// The application's route definitions in registration order.
pub fn app_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/", ViewId::Home),
        RouteEntry::new("/users", ViewId::Users),
        RouteEntry::new("/items", ViewId::Items).guarded(),
        RouteEntry::new("/login", ViewId::Login),
        RouteEntry::new("/register", ViewId::Register),
        RouteEntry::new("/requests", ViewId::Requests).guarded(),
    ]
}

/// Immutable dispatch table.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    /// Build a table from `entries` in listed order.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry has a malformed path pattern.
    pub fn register(entries: impl IntoIterator<Item = RouteEntry>) -> Result<Self, RouteError> {
        let mut table = Self::default();
        for entry in entries {
            validate_pattern(&entry.path)?;
            let key = match_key(&entry.path);
            if let Some(&existing) = table.index.get(&key) {
                log::warn!(
                    "route table: '{}' shadowed by earlier registration '{}'",
                    entry.path,
                    table.entries[existing].path
                );
                continue;
            }
            table.index.insert(key, table.entries.len());
            table.entries.push(entry);
        }
        Ok(table)
    }

    /// Build the table for [`app_routes`].
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in path fails validation.
    pub fn app() -> Result<Self, RouteError> {
        Self::register(app_routes())
    }

    /// Entry matched by a request path, if any.
    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.index.get(&match_key(path)).map(|&idx| &self.entries[idx])
    }

    /// Registered entries in order, with shadowed duplicates removed.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a route table from `entries`.
///
/// # Errors
///
/// Returns an error if any entry has a malformed path pattern.
pub fn register_routes(entries: impl IntoIterator<Item = RouteEntry>) -> Result<RouteTable, RouteError> {
    RouteTable::register(entries)
}
