//! # client
//!
//! Leptos frontend for the code-review feedback board. Renders the
//! [`votes::view::BoardView`] description into the DOM, turns button clicks
//! into [`votes::VoteBoard`] actions, and owns the browser timers that settle
//! the vote animations.
//!
//! Built with `ssr` for server rendering inside the host and with `hydrate`
//! for the WASM bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entry point: attach the client to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
