//! Animated headline counter. Not wired into the boot sequence; pages that
//! show the stat opt in by calling [`init_counter_animation`] themselves.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config;
use crate::dom;
use crate::observe;

pub(crate) fn step_size(target: f64, duration_ms: f64, tick_ms: f64) -> f64 {
    target / (duration_ms / tick_ms)
}

pub(crate) fn label(value: f64) -> String {
    format!("{}+", value.floor() as i64)
}

/// Count `.big-number` up from 0 once it is half visible.
#[wasm_bindgen]
pub fn init_counter_animation() {
    let document = match dom::document() {
        Some(document) => document,
        None => return,
    };
    let element = match dom::query(&document, ".big-number") {
        Some(element) => element,
        None => return,
    };

    let observer = observe::intersection_observer("0px", 0.5, move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        start_count(&target);
        observer.unobserve(&target);
    });

    if let Some(observer) = observer {
        observer.observe(&element);
    }
}

fn start_count(element: &web_sys::Element) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    let step = step_size(
        config::COUNTER_TARGET,
        config::COUNTER_DURATION_MS,
        config::COUNTER_TICK_MS as f64,
    );
    let current = Cell::new(0.0);
    let interval_id = Rc::new(Cell::new(0));

    let tick = {
        let element = element.clone();
        let window = window.clone();
        let interval_id = interval_id.clone();
        Closure::wrap(Box::new(move || {
            current.set(current.get() + step);
            if current.get() >= config::COUNTER_TARGET {
                element.set_text_content(Some(&label(config::COUNTER_TARGET)));
                window.clear_interval_with_handle(interval_id.get());
            } else {
                element.set_text_content(Some(&label(current.get())));
            }
        }) as Box<dyn FnMut()>)
    };

    if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        config::COUNTER_TICK_MS,
    ) {
        interval_id.set(id);
    }
    tick.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_covers_target_over_duration() {
        let step = step_size(15.0, 1500.0, 16.0);
        assert!((step - 0.16).abs() < 1e-9);

        // Walking the step to the target takes roughly duration / tick ticks.
        let mut current = 0.0;
        let mut ticks = 0;
        while current < 15.0 {
            current += step;
            ticks += 1;
        }
        assert_eq!(ticks, 94);
    }

    #[test]
    fn label_floors_and_suffixes() {
        assert_eq!(label(0.0), "0+");
        assert_eq!(label(3.7), "3+");
        assert_eq!(label(15.0), "15+");
    }
}
