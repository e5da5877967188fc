//! # client
//!
//! Leptos + WASM frontend for Aarogya AI: the dashboard, the X-ray scan
//! page, the health-risk questionnaire, and the mental-health support page.
//!
//! Pages render on the server and hydrate in the browser. Everything that
//! touches the DOM or the network is gated behind the `hydrate` feature so
//! the same components compile for SSR.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
