//! # honeypot-monitor
//!
//! Leptos + WASM frontend for the SSH honeypot monitoring dashboard.
//! An authenticated operator signs in, browses the captured attacker
//! sessions, and drills into a single session's commands and terminal
//! replay.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the capture backend. The `hydrate` feature builds the
//! browser bundle; the `ssr` feature exposes [`app::shell`] for a
//! `leptos_axum` host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: installs the panic hook, initializes console
/// logging, and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
