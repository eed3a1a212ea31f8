pub mod app;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use app::App;
use shared::config::{load_config, Config};

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = load_config();
    let level = loaded
        .as_ref()
        .map(|l| l.config.logging.level())
        .unwrap_or(log::Level::Debug);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = match loaded {
        Ok(loaded) => {
            log::info!("Workload config loaded from {:?}", loaded.source);
            loaded.config
        }
        Err(err) => {
            log::error!("Failed to load workload config, using defaults: {:#}", err);
            Config::default()
        }
    };

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
