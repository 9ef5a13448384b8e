pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use shared::config::{load_config, Config};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.level());
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("invalid configuration, using defaults: {:#}", e);
    }
    log::info!("api base: {}", shared::api_utils::api_base(&config.api));

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
