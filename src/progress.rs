//! Thin progress bar tracking how far down the page the reader is.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Window};

use crate::dom;

/// Scroll progress as a percentage. Pages shorter than the viewport have no
/// scrollable track and report zero.
pub(crate) fn percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let track = scroll_height - viewport_height;
    if track > 0.0 {
        scroll_top / track * 100.0
    } else {
        0.0
    }
}

pub fn attach_scroll_progress(window: &Window, document: &Document) {
    let bar = match dom::query(document, ".scroll-progress-bar").and_then(dom::as_html) {
        Some(bar) => bar,
        None => return,
    };

    let win = window.clone();
    let doc = document.clone();
    let update = move || {
        let scroll_top = win.scroll_y().unwrap_or(0.0);
        let scroll_height = doc
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        let viewport = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let _ = bar
            .style()
            .set_property("width", &format!("{}%", percent(scroll_top, scroll_height, viewport)));
    };
    update();

    let on_scroll = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        )
        .unwrap();
    on_scroll.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_top() {
        assert_eq!(percent(0.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn halfway_down_is_fifty() {
        assert_eq!(percent(500.0, 2000.0, 1000.0), 50.0);
    }

    #[test]
    fn bottom_is_one_hundred() {
        assert_eq!(percent(1000.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn short_page_reports_zero() {
        assert_eq!(percent(0.0, 500.0, 1000.0), 0.0);
        assert_eq!(percent(0.0, 1000.0, 1000.0), 0.0);
    }
}
