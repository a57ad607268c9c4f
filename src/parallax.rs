//! Depth effects driven by scroll position.
//!
//! Two flavors: per-element parallax for anything carrying `data-parallax`,
//! and a gentler whole-section drift that only touches sections already
//! marked visible.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, HtmlElement, Window};

use crate::config;
use crate::dom;

/// Vertical offset for a parallax element given where its center sits
/// relative to the viewport center.
pub(crate) fn element_offset(element_center: f64, viewport_center: f64, speed: f64) -> f64 {
    (element_center - viewport_center) * speed * config::PARALLAX_DAMPING
}

/// Parse a `data-parallax` attribute, falling back to the default speed.
pub(crate) fn speed_of(attr: Option<String>) -> f64 {
    attr.and_then(|value| value.parse().ok())
        .unwrap_or(config::DEFAULT_PARALLAX_SPEED)
}

/// Drift for a section container, measured against a reference point 35%
/// down the viewport and clamped so sections never wander far.
pub(crate) fn section_offset(section_center: f64, viewport_height: f64) -> f64 {
    let distance = section_center - viewport_height * config::SECTION_PARALLAX_FOCAL;
    (distance * config::SECTION_PARALLAX_FACTOR)
        .clamp(-config::SECTION_PARALLAX_MAX_PX, config::SECTION_PARALLAX_MAX_PX)
}

pub fn attach_parallax(window: &Window, document: &Document) {
    let elements: Vec<HtmlElement> = dom::query_all(document, "[data-parallax]")
        .into_iter()
        .filter_map(dom::as_html)
        .collect();
    if elements.is_empty() {
        debug!("no data-parallax elements, skipping parallax");
        return;
    }

    let win = window.clone();
    let apply = move || {
        let viewport = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        for element in &elements {
            let speed = speed_of(element.get_attribute("data-parallax"));
            let rect = element.get_bounding_client_rect();
            // Elements below the viewport keep whatever transform they had.
            if rect.top() < viewport {
                let center = rect.top() + rect.height() / 2.0;
                let offset = element_offset(center, viewport / 2.0, speed);
                let _ = element
                    .style()
                    .set_property("transform", &format!("translateY(calc(-50% + {offset}px))"));
            }
        }
    };
    apply();

    let on_scroll = Closure::wrap(Box::new(apply) as Box<dyn FnMut()>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        )
        .unwrap();
    window
        .add_event_listener_with_callback("resize", on_scroll.as_ref().unchecked_ref())
        .unwrap();
    on_scroll.forget();
}

/// Frame-throttled drift for section containers. The `ticking` flag keeps a
/// burst of scroll events down to one DOM pass per rendered frame.
pub struct SectionParallax {
    containers: Vec<HtmlElement>,
    ticking: Cell<bool>,
}

impl SectionParallax {
    pub fn attach(window: &Window, document: &Document) {
        let containers: Vec<HtmlElement> =
            dom::query_all(document, ".section-reveal[data-reveal] .container")
                .into_iter()
                .filter_map(dom::as_html)
                .collect();
        if containers.is_empty() {
            debug!("no section containers, skipping section parallax");
            return;
        }

        let state = Rc::new(SectionParallax {
            containers,
            ticking: Cell::new(false),
        });

        let on_frame = {
            let state = state.clone();
            let win = window.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                state.run(&win);
            }) as Box<dyn FnMut()>))
        };

        let on_scroll = {
            let state = state.clone();
            let win = window.clone();
            let on_frame = on_frame.clone();
            Closure::wrap(Box::new(move || {
                if !state.ticking.get() {
                    state.ticking.set(true);
                    let _ = win.request_animation_frame((*on_frame).as_ref().unchecked_ref());
                }
            }) as Box<dyn FnMut()>)
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                on_scroll.as_ref().unchecked_ref(),
                &options,
            )
            .unwrap();
        window
            .add_event_listener_with_callback("resize", on_scroll.as_ref().unchecked_ref())
            .unwrap();
        // The frame closure stays alive through the leaked scroll handler.
        on_scroll.forget();
    }

    fn run(&self, window: &Window) {
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);

        for container in &self.containers {
            let section = match container.closest("section").ok().flatten() {
                Some(section) => section,
                None => continue,
            };
            if !section.class_list().contains("section-visible") {
                continue;
            }
            let rect = section.get_bounding_client_rect();
            let center = rect.top() + rect.height() / 2.0;
            let offset = section_offset(center, viewport);
            let _ = container
                .style()
                .set_property("transform", &format!("translateY({offset}px)"));
        }
        self.ticking.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_element_has_no_offset() {
        assert_eq!(element_offset(400.0, 400.0, 0.5), 0.0);
    }

    #[test]
    fn offset_scales_with_distance_and_speed() {
        // 200px below center, half speed, damped by 0.1
        assert_eq!(element_offset(600.0, 400.0, 0.5), 10.0);
    }

    #[test]
    fn offset_is_negative_above_center() {
        assert!(element_offset(100.0, 400.0, 0.3) < 0.0);
    }

    #[test]
    fn speed_defaults_when_missing_or_garbage() {
        assert_eq!(speed_of(None), config::DEFAULT_PARALLAX_SPEED);
        assert_eq!(speed_of(Some("fast".into())), config::DEFAULT_PARALLAX_SPEED);
        assert_eq!(speed_of(Some("0.5".into())), 0.5);
    }

    #[test]
    fn section_offset_zero_at_focal_point() {
        let viewport = 1000.0;
        assert_eq!(section_offset(viewport * 0.35, viewport), 0.0);
    }

    #[test]
    fn section_offset_clamps_both_ways() {
        assert_eq!(section_offset(10_000.0, 800.0), 35.0);
        assert_eq!(section_offset(-10_000.0, 800.0), -35.0);
    }
}
