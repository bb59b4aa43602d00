//! # student-portal
//!
//! Leptos + WASM frontend for the student dashboard (overview and books
//! sections).
//!
//! This crate contains pages, components, the session store that owns the
//! signed-in student's identity, REST types, and the auth API client. The
//! student API itself is an external service reached over HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: install panic/console hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
