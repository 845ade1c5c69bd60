//! Pages mounted only after the guard finds an access token.

use leptos::prelude::*;

use super::PageShell;
use crate::router::ViewId;

#[component]
pub fn ItemsPage() -> impl IntoView {
    view! {
        <PageShell title={ViewId::Items.title()}>
            <p>"Equipment available to borrow."</p>
        </PageShell>
    }
}

#[component]
pub fn RequestsPage() -> impl IntoView {
    view! {
        <PageShell title={ViewId::Requests.title()}>
            <p>"Your borrow requests."</p>
        </PageShell>
    }
}
