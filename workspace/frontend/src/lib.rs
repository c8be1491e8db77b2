use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod ui;

use components::advisor::Advisor;
use components::page::Page;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Page title="Crop Advisor">
            <Advisor />
        </Page>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Crop Advisor Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base: {:?}", settings.api_base);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
