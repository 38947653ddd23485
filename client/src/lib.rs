//! # meridian-client
//!
//! Leptos frontend for the Meridian marketing site, rendered on the server
//! and hydrated in the browser.
//!
//! Pages are thin hosts over static `content`. The interesting parts are
//! `components::scroll_memory`, which binds browser navigation events to the
//! `scroll-memory` engine, and the contact form in `pages::contact`.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
