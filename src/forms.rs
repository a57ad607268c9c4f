//! Submission UX for the newsletter and contact forms. Neither form talks
//! to a backend; the handlers only swap labels around and reset.

use gloo_timers::callback::Timeout;
use log::info;
use serde_json::{Map, Value};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Document, FormData, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::config;
use crate::dom;

pub fn attach_newsletter(document: &Document) {
    let form = match dom::query(document, ".newsletter-form")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    {
        Some(form) => form,
        None => return,
    };

    let on_submit = {
        let form = form.clone();
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let email = form
                .query_selector("input[type=\"email\"]")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
            let email = match email {
                Some(input) => input,
                None => return,
            };
            if email.value().is_empty() {
                return;
            }
            if let Some(button) = submit_button(&form) {
                flash_and_reset(&button, &form, "¡Gracias por suscribirte!");
            }
        }) as Box<dyn FnMut(web_sys::Event)>)
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .unwrap();
    on_submit.forget();
}

pub fn attach_contact(document: &Document) {
    let form = match dom::query(document, ".contacto-form")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    {
        Some(form) => form,
        None => return,
    };

    let on_submit = {
        let form = form.clone();
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();

            let record = collect_fields(&form);
            info!(
                "contact form submission: {}",
                Value::Object(record)
            );

            if let Some(button) = submit_button(&form) {
                flash_and_reset(&button, &form, "¡Mensaje enviado!");
            }
        }) as Box<dyn FnMut(web_sys::Event)>)
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .unwrap();
    on_submit.forget();
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlElement> {
    form.query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(dom::as_html)
}

/// Swap the button into its success state, then restore label, background
/// and form contents after the configured delay.
fn flash_and_reset(button: &HtmlElement, form: &HtmlFormElement, message: &str) {
    let original = button.text_content().unwrap_or_default();
    button.set_text_content(Some(message));
    let _ = button
        .style()
        .set_property("background", config::FORM_SUCCESS_COLOR);

    let button = button.clone();
    let form = form.clone();
    Timeout::new(config::FORM_RESET_DELAY_MS, move || {
        button.set_text_content(Some(&original));
        let _ = button.style().remove_property("background");
        form.reset();
    })
    .forget();
}

fn collect_fields(form: &HtmlFormElement) -> Map<String, Value> {
    let mut record = Map::new();
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(_) => return record,
    };
    let entries = JsValue::from(data.entries());
    if let Ok(Some(iter)) = js_sys::try_iter(&entries) {
        for entry in iter.flatten() {
            let pair = js_sys::Array::from(&entry);
            let key = pair.get(0).as_string().unwrap_or_default();
            let value = pair.get(1).as_string().unwrap_or_default();
            record.insert(key, Value::String(value));
        }
    }
    record
}
