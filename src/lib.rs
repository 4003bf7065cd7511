//! # gatehouse
//!
//! Leptos + WASM front-end for the school gate access-control service.
//!
//! The crate holds the screens (login, gate control, temporary access,
//! history, licence plates, parking), the reactive session and gate state,
//! the REST client and the reconnecting status channel. Wire types and the
//! transport-free channel state machine live in the `gatewire` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
