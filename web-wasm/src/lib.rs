//! Pokedex Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod url_params;

use wasm_bindgen::prelude::*;
use leptos::prelude::*;
use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // ?theme=midnight でテーマ切り替え
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let theme = url_params::theme_from_search(&search);

    leptos::mount::mount_to_body(move || view! { <App theme=theme /> });
}
