use web_sys::console;

mod api;
pub mod config;
mod pages;
pub mod router;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    console::log_1(&"Starting VirusDecode Frontend (wasm)".into());

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__VIRUSDECODE_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        web_sys::console::log_1(&"Runtime config initialized".into());
    });

    router::mount_app();
}
