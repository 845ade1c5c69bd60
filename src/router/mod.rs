//! Client-side routing: static route table plus pre-navigation guard.
//!
//! ARCHITECTURE
//! ============
//! `table` holds the immutable path-to-view bindings, `credential` abstracts
//! the browser token store, and `guard` combines both into `RouterHandle`,
//! which answers one `NavigationRequest` at a time with a
//! `NavigationOutcome`. Nothing here touches the DOM; the Leptos shell in
//! `app` applies outcomes to browser history.

pub mod config;
pub mod credential;
pub mod error;
pub mod guard;
pub mod path;
pub mod table;

pub use config::RouterConfig;
pub use credential::{CredentialProvider, LocalStorageCredentials, MemoryCredentials};
pub use error::RouteError;
pub use guard::{NavigationOutcome, NavigationRequest, RouterHandle};
pub use table::{RouteEntry, RouteTable, ViewId, app_routes, register_routes};
