//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each `ViewId` in the route table maps to one page component here. Pages
//! are thin placeholders; data loading and forms live with the views that
//! own them.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod guarded;
pub mod public;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::router::ViewId;

/// Links shown in the navigation bar, in display order.
pub const NAV_LINKS: &[(&str, ViewId)] = &[
    ("/", ViewId::Home),
    ("/users", ViewId::Users),
    ("/items", ViewId::Items),
    ("/requests", ViewId::Requests),
    ("/login", ViewId::Login),
    ("/register", ViewId::Register),
];

/// Mount the page bound to `id`.
pub fn render(id: ViewId) -> AnyView {
    match id {
        ViewId::Home => view! { <public::HomePage/> }.into_any(),
        ViewId::Users => view! { <public::UsersPage/> }.into_any(),
        ViewId::Login => view! { <public::LoginPage/> }.into_any(),
        ViewId::Register => view! { <public::RegisterPage/> }.into_any(),
        ViewId::Items => view! { <guarded::ItemsPage/> }.into_any(),
        ViewId::Requests => view! { <guarded::RequestsPage/> }.into_any(),
    }
}

/// Navigation bar linking every route.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {NAV_LINKS
                .iter()
                .map(|&(href, id)| view! { <A href=href>{id.title()}</A> })
                .collect_view()}
        </nav>
    }
}

/// Common frame: document title, navigation, and page heading.
#[component]
pub fn PageShell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <Title text=title/>
        <NavBar/>
        <main class="page">
            <h1>{title}</h1>
            {children()}
        </main>
    }
}

/// Shown when no route matches the current location.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageShell title="Not found">
            <p>"Page not found."</p>
        </PageShell>
    }
}
