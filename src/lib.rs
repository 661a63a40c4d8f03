//! # oakline-client
//!
//! Leptos + WASM frontend for the Oakline real-estate admin dashboard.
//! The crate centers on the authentication session core: a session store
//! mutated only through named transitions, driven by dispatcher operations
//! that each make one call to the remote authentication service and apply
//! one terminal transition.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
