//! Root application component with guarded client-side routing.
//!
//! DESIGN
//! ======
//! Outcome threading, redirect options, and view selection are plain
//! functions; the components only bind them to the location memo and the
//! redirect effect.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::{self, NotFoundPage};
use crate::router::{
    CredentialProvider, LocalStorageCredentials, NavigationOutcome, NavigationRequest, RouteError, RouteTable,
    RouterConfig, RouterHandle, ViewId,
};

/// Router backed by the browser's `localStorage`.
pub type BrowserRouter = RouterHandle<LocalStorageCredentials>;

/// What the outlet mounts for an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mount {
    Page(ViewId),
    NotFound,
    /// Redirect pending; nothing is mounted for the blocked target.
    Nothing,
}

/// Build the application router from the built-in table and build-time config.
///
/// # Errors
///
/// Returns an error if the built-in table or guard setup is invalid.
pub fn build_router() -> Result<BrowserRouter, RouteError> {
    build_router_with(RouterConfig::from_build_env(), RouteTable::app(), LocalStorageCredentials)
}

/// Assemble a router, replacing a rejected config with defaults.
///
/// # Errors
///
/// Returns the table error, or the guard setup error.
pub fn build_router_with<P: CredentialProvider>(
    config: Result<RouterConfig, RouteError>,
    table: Result<RouteTable, RouteError>,
    credentials: P,
) -> Result<RouterHandle<P>, RouteError> {
    let config = config.unwrap_or_else(|e| {
        log::error!("router config rejected, using defaults: {e}");
        RouterConfig::default()
    });
    let router = RouterHandle::new(table?, credentials, config)?;
    log::debug!("router ready, login at {}", router.config().login_path);
    Ok(router)
}

/// Request for `pathname`; the previous destination is the source path.
pub fn next_request(prev: Option<&NavigationOutcome>, pathname: String) -> NavigationRequest {
    let source = prev.map(|o| o.destination().to_owned()).unwrap_or_default();
    NavigationRequest::new(pathname, source)
}

pub fn next_outcome<P: CredentialProvider>(
    router: &RouterHandle<P>,
    prev: Option<&NavigationOutcome>,
    pathname: String,
) -> NavigationOutcome {
    router.navigate(&next_request(prev, pathname))
}

/// History navigation for a redirect. Replaces the blocked entry.
pub fn redirect_navigation(outcome: &NavigationOutcome) -> Option<(String, NavigateOptions)> {
    match outcome {
        NavigationOutcome::Redirect { to } => {
            Some((to.clone(), NavigateOptions { replace: true, ..NavigateOptions::default() }))
        }
        NavigationOutcome::Proceed { .. } => None,
    }
}

pub fn mount_for<P: CredentialProvider>(router: &RouterHandle<P>, outcome: &NavigationOutcome) -> Mount {
    match outcome {
        NavigationOutcome::Proceed { path } => router.lookup(path).map_or(Mount::NotFound, |e| Mount::Page(e.view)),
        NavigationOutcome::Redirect { .. } => Mount::Nothing,
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match build_router() {
        Ok(router) => {
            let router = Arc::new(router);
            view! {
                <Router>
                    <GuardedOutlet router/>
                </Router>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("route table rejected: {e}");
            view! { <p class="router-error">"Navigation is unavailable."</p> }.into_any()
        }
    }
}

/// Runs the guard on every location change and mounts the resulting view.
#[component]
fn GuardedOutlet(router: Arc<BrowserRouter>) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let guard = Arc::clone(&router);
    let outcome = Memo::new(move |prev: Option<&NavigationOutcome>| next_outcome(&guard, prev, location.pathname.get()));

    Effect::new(move || {
        if let Some((to, options)) = redirect_navigation(&outcome.get()) {
            navigate(&to, options);
        }
    });

    move || match mount_for(&router, &outcome.get()) {
        Mount::Page(id) => pages::render(id),
        Mount::NotFound => view! { <NotFoundPage/> }.into_any(),
        Mount::Nothing => ().into_any(),
    }
}
