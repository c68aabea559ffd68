//! Browser entry point: section navigation, mobile menu and slide carousel
//! for a single-page site.
//!
//! The state machines live in `pageflow-core`; this crate finds the markup,
//! forwards DOM events to them and renders what they ask for.

pub mod config;
pub mod dom;

use leptos::prelude::document;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Log everything at the logger; the page config narrows the level later.
    let _ = console_log::init_with_level(log::Level::Trace);
    log::set_max_level(log::LevelFilter::Info);

    let doc = document();
    if doc.ready_state() == "loading" {
        dom::listen(&doc, "DOMContentLoaded", |_| dom::mount());
    } else {
        dom::mount();
    }
}
