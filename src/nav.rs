//! Navigation behaviors: mobile menu toggle, smooth anchor scrolling,
//! header scroll state and active-link highlighting.

use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::config;
use crate::dom;
use crate::observe;

/// Mobile hamburger menu. Owns the toggle button, the slide-in menu and the
/// `menu-open` marker on `body`.
pub struct NavMenu {
    toggle: Element,
    menu: Element,
    body: Option<HtmlElement>,
}

impl NavMenu {
    pub fn attach(document: &Document) {
        let toggle = dom::query(document, ".nav-toggle");
        let menu = dom::query(document, ".nav-menu");
        let (toggle, menu) = match (toggle, menu) {
            (Some(toggle), Some(menu)) => (toggle, menu),
            _ => {
                debug!("nav toggle/menu not in page, skipping menu wiring");
                return;
            }
        };
        let overlay = dom::query(document, ".nav-overlay");

        let state = Rc::new(NavMenu {
            toggle,
            menu,
            body: document.body(),
        });

        let on_toggle = {
            let state = state.clone();
            Closure::wrap(Box::new(move || state.flip()) as Box<dyn FnMut()>)
        };
        state
            .toggle
            .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
            .unwrap();
        on_toggle.forget();

        // One shared close handler for the overlay and every menu link.
        let on_close = {
            let state = state.clone();
            Closure::wrap(Box::new(move || state.close()) as Box<dyn FnMut()>)
        };
        if let Some(overlay) = overlay {
            overlay
                .add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())
                .unwrap();
        }
        for link in dom::query_all_within(&state.menu, "a") {
            link.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())
                .unwrap();
        }
        on_close.forget();
    }

    fn flip(&self) {
        let open = self.menu.class_list().toggle("active").unwrap_or(false);
        let _ = self.toggle.class_list().toggle("active");
        if let Some(body) = &self.body {
            let _ = body.class_list().toggle_with_force("menu-open", open);
        }
    }

    fn close(&self) {
        let _ = self.menu.class_list().remove_1("active");
        let _ = self.toggle.class_list().remove_1("active");
        if let Some(body) = &self.body {
            let _ = body.class_list().remove_1("menu-open");
        }
    }
}

/// Intercept clicks on in-page anchors and glide to the target instead of
/// jumping. Anchors whose target is missing keep the default behavior.
pub fn attach_smooth_scroll(document: &Document) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let element = anchor.clone();
        let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let href = match element.get_attribute("href") {
                Some(href) => href,
                None => return,
            };
            if href == "#" {
                return;
            }
            if let Some(target) = dom::query(&doc, &href) {
                event.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        anchor
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .unwrap();
        on_click.forget();
    }
}

pub fn attach_header_scroll(window: &Window, document: &Document) {
    let header = match document.get_element_by_id("mainHeader") {
        Some(header) => header,
        None => {
            debug!("#mainHeader not in page, skipping header scroll state");
            return;
        }
    };

    let win = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let list = header.class_list();
        if is_past_threshold(win.scroll_y().unwrap_or(0.0)) {
            let _ = list.add_1("scrolled");
        } else {
            let _ = list.remove_1("scrolled");
        }
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .unwrap();
    on_scroll.forget();
}

pub(crate) fn is_past_threshold(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD
}

/// Highlight the nav link pointing at the section currently crossing the
/// upper third of the viewport.
pub fn attach_active_nav(document: &Document) {
    let sections = dom::query_all(document, "section[id]");
    if sections.is_empty() {
        debug!("no sections with ids, skipping active-nav highlight");
        return;
    }
    let links = dom::query_all(document, ".nav-link");

    let observer = observe::intersection_observer(
        config::ACTIVE_NAV_ROOT_MARGIN,
        0.0,
        move |entry, _observer| {
            if !entry.is_intersecting() {
                return;
            }
            let id = match entry.target().get_attribute("id") {
                Some(id) => id,
                None => return,
            };
            let href = format!("#{id}");
            for link in &links {
                let list = link.class_list();
                let _ = list.remove_1("active");
                if link.get_attribute("href").as_deref() == Some(href.as_str()) {
                    let _ = list.add_1("active");
                }
            }
        },
    );

    if let Some(observer) = observer {
        for section in &sections {
            observer.observe(section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_stays_flat_at_top() {
        assert!(!is_past_threshold(0.0));
    }

    #[test]
    fn header_flat_exactly_at_threshold() {
        assert!(!is_past_threshold(30.0));
    }

    #[test]
    fn header_compacts_past_threshold() {
        assert!(is_past_threshold(31.0));
    }
}
