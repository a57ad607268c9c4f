//! Viewport-entry effects: one-shot element reveals and per-section
//! transitions.

use crate::config;
use crate::dom;
use crate::observe;
use web_sys::Document;

/// Reveal elements the first time they enter the viewport. The class never
/// comes back off, so scrolling away does not replay the animation.
pub fn attach_scroll_reveal(document: &Document) {
    let elements = dom::query_all(document, ".reveal-up, .reveal-scale");
    if elements.is_empty() {
        return;
    }

    let observer = observe::intersection_observer(
        config::REVEAL_ROOT_MARGIN,
        config::REVEAL_THRESHOLD,
        |entry, observer| {
            if entry.is_intersecting() {
                let target = entry.target();
                let _ = target.class_list().add_1("visible");
                // One-shot: stop watching once revealed.
                observer.unobserve(&target);
            }
        },
    );

    if let Some(observer) = observer {
        for element in &elements {
            observer.observe(element);
        }
    }
}

/// Mark section wrappers visible as they cross into the viewport. Stays
/// observed; re-adding the class on later passes is a no-op.
pub fn attach_section_transitions(document: &Document) {
    let sections = dom::query_all(document, ".section-reveal[data-reveal]");
    if sections.is_empty() {
        return;
    }

    let observer = observe::intersection_observer(
        config::SECTION_ROOT_MARGIN,
        config::SECTION_THRESHOLD,
        |entry, _observer| {
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1("section-visible");
            }
        },
    );

    if let Some(observer) = observer {
        for section in &sections {
            observer.observe(section);
        }
    }
}
