pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod pages;
pub mod routes;
#[cfg(test)]
mod testing;
pub mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
