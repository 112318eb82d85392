//! Magmist marketing site and FAQ chatbot.
//!
//! Server-rendered with Leptos and hydrated in the browser. The chatbot runs
//! entirely client-side on top of `magmist-conversation`.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod nav;
pub mod pages;
pub mod scroll;
pub mod timer;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    logging::init_browser();
    leptos::mount::hydrate_body(App);
}
