//! # client
//!
//! Leptos + WASM front-end for the task manager. Pages, the task card
//! component, dashboard state, and browser implementations of the transport,
//! session storage and dialogs that `tasks` abstracts over.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
