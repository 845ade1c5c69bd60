//! Pages reachable without a stored access token.

use leptos::prelude::*;

use super::PageShell;
use crate::router::ViewId;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell title={ViewId::Home.title()}>
            <p>"Borrow lab equipment and track your requests."</p>
        </PageShell>
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <PageShell title={ViewId::Users.title()}>
            <p>"Registered users."</p>
        </PageShell>
    }
}

/// Login page. The identity flow stores `access_token` on success.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PageShell title={ViewId::Login.title()}>
            <p>"Sign in to borrow equipment."</p>
        </PageShell>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <PageShell title={ViewId::Register.title()}>
            <p>"Create an account."</p>
        </PageShell>
    }
}
