//! Progressive enhancement layer for the marketing site.
//!
//! The module is loaded once per page; the start function waits for the DOM
//! to be parsed and then wires every behavior against the elements that are
//! actually present. Pages missing a piece of markup simply skip the
//! matching behavior.

use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod config;
mod counter;
mod dom;
mod forms;
mod hero;
mod nav;
mod observe;
mod parallax;
mod progress;
mod reveal;

pub use counter::init_counter_animation;

#[wasm_bindgen(start)]
pub fn start() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting site effects");

    let document = match dom::document() {
        Some(document) => document,
        None => return,
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::wrap(Box::new(boot) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .unwrap();
        on_ready.forget();
    } else {
        boot();
    }
}

fn boot() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };

    nav::NavMenu::attach(&document);
    nav::attach_smooth_scroll(&document);
    nav::attach_header_scroll(&window, &document);
    nav::attach_active_nav(&document);
    hero::HeroVideo::attach(&document);
    forms::attach_contact(&document);
    forms::attach_newsletter(&document);
    reveal::attach_scroll_reveal(&document);
    parallax::attach_parallax(&window, &document);
    reveal::attach_section_transitions(&document);
    progress::attach_scroll_progress(&window, &document);
    parallax::SectionParallax::attach(&window, &document);
}
