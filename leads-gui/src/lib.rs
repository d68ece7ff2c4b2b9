use cfg_if::cfg_if;

pub mod app;
pub mod error_template;
pub mod pages;
pub mod server;
pub mod widget;

#[cfg(feature = "ssr")]
pub mod fileserv;

#[cfg(all(test, feature = "ssr"))]
mod testing;

cfg_if! { if #[cfg(feature = "hydrate")] {
    use leptos::*;
    use wasm_bindgen::prelude::wasm_bindgen;
    use crate::app::*;

    #[wasm_bindgen]
    pub fn hydrate() {
        console_error_panic_hook::set_once();
        _ = console_log::init_with_level(log::Level::Debug);

        leptos::mount_to_body(App);
    }
}}
