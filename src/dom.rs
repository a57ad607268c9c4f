//! Small lookup helpers over `web_sys`. Absent elements come back as `None`
//! so callers can skip their behavior without touching the page.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(list),
        Err(_) => Vec::new(),
    }
}

/// Like [`query_all`] but scoped to a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(list) => elements(list),
        Err(_) => Vec::new(),
    }
}

pub fn as_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
