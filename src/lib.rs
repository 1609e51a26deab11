// lib.rs - Root module for the book_shelf library
//
// The web application lives under `web_app`. The pure shopping-list logic
// (model, pagination, storage, coordinator) compiles without any feature so
// it can be tested natively; the Leptos UI needs `ssr` or `hydrate`.

pub mod web_app;

/// WASM entry point: hydrates the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
