use wasm_bindgen_futures::spawn_local;
use web_sys::console;

use virusdecode_frontend::{config, router};

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    console::log_1(&"Starting VirusDecode Frontend: initializing runtime config".into());

    spawn_local(async move {
        config::init().await;
        console::log_1(&"Runtime config initialized".into());
        router::mount_app();
    });
}
