//! Voxchat browser widget.
//!
//! ARCHITECTURE
//! ============
//! `state` holds the session model, `util` the pure renderers and the
//! microphone seam, `net` the backend calls, `pages` the submission flows and
//! `components` the view adapters. Built with `hydrate` for the browser and
//! with `ssr` for the host server's document shell.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wires console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("voxchat hydrating");
    leptos::mount::hydrate_body(app::App);
}
