//! # equipment-desk
//!
//! Leptos + WASM frontend shell for the equipment borrowing application.
//!
//! This crate owns client-side navigation: the route table, the
//! authentication guard that reads the access token from browser storage,
//! and the placeholder pages each route mounts.

pub mod app;
pub mod pages;
pub mod router;

/// WASM entry point for client-side rendering.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main_csr() {
    console_error_panic_hook::set_once();
    // A logger may already be installed; keep it.
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::mount_to_body(app::App);
}
